//! Print what the indexer sees in a Livewire project
//!
//! Usage: cargo run --example inspect_project -- /path/to/laravel-app [view.blade.php]

use livewire_index::{ComponentIndexer, Degrade};
use std::env;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    let root = args.next().unwrap_or_else(|| ".".to_string());
    let view = args.next();

    let indexer = ComponentIndexer::open(&root);

    // Fail loudly here: a missing registry usually means `php artisan livewire:discover` was never run
    let components = indexer.list_components_with_params(None)?;

    println!("Components in {root}:");
    for component in &components {
        match &component.params {
            Some(params) if !params.is_empty() => {
                println!("  - {} (mount: {})", component.name, params.join(", "))
            }
            Some(_) => println!("  - {}", component.name),
            None => println!("  - {} (mount: ?)", component.name),
        }
    }

    if let Some(view) = view {
        match indexer.resolve_component_from_view(&view).degrade() {
            Some(component) => {
                println!("\n{view} is rendered by {}", component.name);

                let actions = indexer.extract_actions(&view).degrade_or_default();
                println!("  Actions: {}", actions.join(", "));

                let properties = indexer.extract_properties(&view).degrade_or_default();
                println!("  Properties: {}", properties.join(", "));
            }
            None => println!("\nNo component renders {view}"),
        }
    }

    Ok(())
}
