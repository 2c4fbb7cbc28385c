//! Facets demo
//!
//! Entry point showing the two halves of the workspace working together:
//! rotating file logging, and an entity composed from accessor facets.

use facets_core::{FacetResult, logging};
use facets_mixin::prelude::*;
use log::{error, info};
use serde::{Deserialize, Serialize};

/// A blog article composed from the facets it needs.
#[derive(Debug, Default, Serialize, Deserialize)]
struct Article {
    uuid: UniqueId,
    name: Name,
    slug: Slug,
    status: Status,
    enabled: Enabled,
    timestamps: Timestamps,
}

impl UuidAware for Article {
    fn uuid_facet(&self) -> &UniqueId {
        &self.uuid
    }

    fn uuid_facet_mut(&mut self) -> &mut UniqueId {
        &mut self.uuid
    }
}

impl NameAware for Article {
    fn name_facet(&self) -> &Name {
        &self.name
    }

    fn name_facet_mut(&mut self) -> &mut Name {
        &mut self.name
    }
}

impl SlugAware for Article {
    fn slug_facet(&self) -> &Slug {
        &self.slug
    }

    fn slug_facet_mut(&mut self) -> &mut Slug {
        &mut self.slug
    }
}

impl StatusAware for Article {
    fn status_facet(&self) -> &Status {
        &self.status
    }

    fn status_facet_mut(&mut self) -> &mut Status {
        &mut self.status
    }
}

impl EnabledAware for Article {
    fn enabled_facet(&self) -> &Enabled {
        &self.enabled
    }

    fn enabled_facet_mut(&mut self) -> &mut Enabled {
        &mut self.enabled
    }
}

impl TimestampAware for Article {
    fn timestamps(&self) -> &Timestamps {
        &self.timestamps
    }

    fn timestamps_mut(&mut self) -> &mut Timestamps {
        &mut self.timestamps
    }
}

impl JsonConvertible for Article {}

fn main() -> FacetResult<()> {
    // Rotating file logs under ./logs, level depending on build mode
    let log_dir = std::env::current_dir()?.join("logs");
    logging::init(logging::default_level(), &log_dir)?;

    info!("event=demo_start version={}", env!("CARGO_PKG_VERSION"));
    info!("event=user_login user=admin");
    error!("event=parse_failure file=index.html line=42");

    let mut article = Article::default();
    article.set_name("Getting Started With Facets");
    article.set_slug(article.name_slug());
    article.set_status("draft");
    article.generate_uuid();
    article.touch();

    info!(
        "event=article_created uuid={} slug={} status={}",
        article.uuid_facet(),
        article.slug(),
        article.status()
    );

    println!("article:    {}", article.name());
    println!("slug:       {}", article.slug());
    println!("lifecycle:  {}", article.timestamps());
    println!("as json:    {}", article.to_json()?);

    article.touch_deleted().disable();
    info!(
        "event=article_soft_deleted uuid={} enabled={}",
        article.uuid_facet(),
        article.is_enabled()
    );
    println!("after soft delete: {}", article.timestamps());

    Ok(())
}
