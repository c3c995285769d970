//! Category command handlers

use anyhow::Result;

use epigraph_core::Store;

use crate::output::Output;

/// List all categories, marking the selected filter
pub fn list(store: &Store, output: &Output) -> Result<()> {
    let categories = store.categories();
    output.print_categories(&categories, store.filter());
    Ok(())
}

/// Show or set the category filter
pub fn filter(store: &mut Store, value: Option<String>, output: &Output) -> Result<()> {
    match value {
        Some(value) => {
            store.set_filter(&value)?;
            output.success(&format!("Filter set to '{}'", value));
        }
        None => {
            if output.is_quiet() {
                println!("{}", store.filter());
            } else {
                output.message(&format!("Selected filter: {}", store.filter()));
            }
        }
    }

    Ok(())
}
