use anyhow::Result;

pub mod bootstrap;
pub mod check;

#[allow(async_fn_in_trait)]
pub trait Command {
    async fn execute(&self) -> Result<()>;
}

pub async fn show_how_to_get_started() -> Result<()> {
    println!("🧹 Chores - Project Checks and Environment Bootstrap");
    println!();
    println!("To get started:");
    println!("  🚀 chores bootstrap    # Create the environment and install dev dependencies");
    println!("  ✅ chores check        # Run every quality check");
    println!();
    println!("Individual checks:");
    println!("  🧪 chores check test   # Test suite only");
    println!("  🔍 chores check type   # Static type checker only");
    println!("  🎨 chores check lint   # Formatter (check mode) + linter");
    println!();
    println!("💡 Run 'chores bootstrap' once, then 'chores check' before every push!");
    Ok(())
}
