use crate::presentation::renderer;
use crate::presentation::view_models::{EntityListViewModel, EntityViewModel};
use crate::presentation::views::EntityListView;
use anyhow::{Context, Result, bail};
use drushctl_runtime::DrushRunner;
use drushctl_runtime::ops::entity;

pub fn handle(
    runner: &dyn DrushRunner,
    entity_type: Option<String>,
    entity_id: Option<String>,
    json: bool,
) -> Result<()> {
    let Some(entity_type) = entity_type else {
        bail!(
            "Usage: drushctl entity-info <entity_type> [entity_id]\n\
             Entity types: node, user, taxonomy_term, comment, file"
        );
    };

    if let Some(entity_id) = entity_id {
        let output = entity::view(runner, &entity_type, &entity_id)
            .with_context(|| format!("Failed to get entity information for {}", entity_type))?;

        if json {
            return renderer::render_json(&EntityViewModel {
                entity_type,
                entity_id,
                output,
            });
        }
        println!("{}", output);
        return Ok(());
    }

    let listing = entity::list(runner, &entity_type)
        .with_context(|| format!("Failed to get entity information for {}", entity_type))?;
    // Count runs strictly after the listing and never fails the command
    let total = entity::count(runner, &entity_type);

    let view_model = EntityListViewModel {
        entity_type,
        listing,
        total,
    };

    if json {
        return renderer::render_json(&view_model);
    }
    print!("{}", EntityListView::new(&view_model));
    Ok(())
}
