//! CLI Command Handlers
//!
//! Each command drives a view model and renders its state as text.

use orchid_core::view_model::{CatalogState, CatalogStatus, NO_FAVORITES_MESSAGE};
use orchid_core::{AppContext, DomainError, DomainResult, Orchid};

use crate::Command;

const NO_DATA_MESSAGE: &str = "No data available";

pub async fn execute(ctx: &AppContext, command: &Command) -> DomainResult<String> {
    match command {
        Command::List => list(ctx).await,
        Command::Favorites => Ok(favorites(ctx)),
        Command::Show { name } => show(ctx, name).await,
        Command::Toggle { name } => toggle(ctx, name).await,
    }
}

async fn list(ctx: &AppContext) -> DomainResult<String> {
    let catalog = ctx.catalog_view_model();
    catalog.refresh().await;
    Ok(render_catalog(&catalog.state()))
}

fn favorites(ctx: &AppContext) -> String {
    let vm = ctx.favorites_view_model();
    if vm.is_empty() {
        return NO_FAVORITES_MESSAGE.to_string();
    }
    vm.items()
        .iter()
        .map(|orchid| format!("{} (Origin: {})", orchid.name, orchid.origin))
        .collect::<Vec<_>>()
        .join("\n")
}

async fn show(ctx: &AppContext, name: &str) -> DomainResult<String> {
    let detail = ctx.detail_view_model(resolve(ctx, name).await?);

    let mut lines = vec![detail.orchid().name.clone()];
    lines.extend(detail.detail_lines());
    lines.push(format!("[{}]", detail.favorite_label()));
    Ok(lines.join("\n"))
}

async fn toggle(ctx: &AppContext, name: &str) -> DomainResult<String> {
    let detail = ctx.detail_view_model(resolve(ctx, name).await?);
    let message = if detail.toggle() {
        format!("Added {} to favorites", name)
    } else {
        format!("Removed {} from favorites", name)
    };
    Ok(message)
}

/// Find an orchid in the catalog, falling back to the stored favorites
/// when the catalog is unavailable.
async fn resolve(ctx: &AppContext, name: &str) -> DomainResult<Orchid> {
    let catalog = ctx.catalog_view_model();
    catalog.refresh().await;
    if let Some(orchid) = catalog.find(name) {
        return Ok(orchid);
    }

    ctx.favorites()
        .snapshot()
        .iter()
        .find(|orchid| orchid.name == name)
        .cloned()
        .ok_or_else(|| DomainError::NotFound(format!("orchid '{}'", name)))
}

pub fn render_catalog(state: &CatalogState) -> String {
    match state.status() {
        CatalogStatus::Loading => "Loading...".to_string(),
        CatalogStatus::Empty => match &state.last_error {
            Some(error) => format!("{}\n({})", NO_DATA_MESSAGE, error),
            None => NO_DATA_MESSAGE.to_string(),
        },
        CatalogStatus::Ready => {
            let mut out = Vec::new();
            for category in state.categories.iter() {
                out.push(format!("== {} ==", category.name));
                for orchid in &category.items {
                    let heart = if orchid.favorite { "♥" } else { "♡" };
                    out.push(format!("  {} {} (Origin: {})", heart, orchid.name, orchid.origin));
                }
            }
            out.join("\n")
        }
    }
}
