use anyhow::Result;

use notus_index::{SeverityClass, DEFAULT_RENDER_RANGE};

/// Print the drought severity legend.
pub fn run() -> Result<()> {
    println!("SPEI (Drought Index)");
    println!(
        "render range: {} to {}",
        DEFAULT_RENDER_RANGE.0, DEFAULT_RENDER_RANGE.1
    );
    for class in SeverityClass::ALL {
        println!("  {}  {}", class.color(), class.label());
    }
    Ok(())
}
