//! Component asset discovery, classification and caching.
//!
//! ```text
//! asset/
//! ├── directory   # DirectoryPath, DirectoryRegistry (freeze-on-first-use)
//! ├── matcher     # MatchMode, file name matching against component ids
//! ├── kind        # AssetKind (stylesheet / script)
//! ├── record      # Asset record + tag rendering
//! ├── resolve     # AssetResolver with per-component cache
//! ├── minify      # inline CSS/JS minification
//! └── version     # content-hash cache busting for linked assets
//! ```

mod directory;
mod kind;
mod matcher;
pub mod minify;
mod record;
mod resolve;
pub mod version;

pub use directory::{DirectoryPath, DirectoryRegistry};
pub use kind::AssetKind;
pub use matcher::MatchMode;
pub(crate) use matcher::VARIANT_DELIMITER;
pub use record::{Asset, AssetOptions};
pub use resolve::{AssetResolver, AssetSet, classify_all};
