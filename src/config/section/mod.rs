//! Configuration section definitions.
//!
//! Each module corresponds to a section in `vidshelf.toml`:
//!
//! | Module    | TOML Section  | Purpose                              |
//! |-----------|---------------|--------------------------------------|
//! | `site`    | `[site]`      | Page title, lang, asset mode         |
//! | `serve`   | `[serve]`     | HTTP server                          |
//! | `catalog` | `[catalog]`   | Catalog snapshot location            |
//! | `assets`  | `[assets]`    | Public dir and bundler manifest      |
//! | `hydrate` | `[hydrate]`   | Bootstrap strategy and endpoint      |

mod assets;
mod catalog;
mod hydrate;
mod serve;
mod site;

pub use assets::AssetsConfig;
pub use catalog::CatalogConfig;
pub use hydrate::HydrateConfig;
pub use serve::ServeConfig;
pub use site::SiteSectionConfig;
