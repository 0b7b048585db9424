//! Per-render-pass state.
//!
//! A `RenderContext` owns the search directories, the resolver cache, the
//! called and ignored components. Create one per page render (or request)
//! and hand it to every component that renders into that page.

use std::path::{Path, PathBuf};

use crate::asset::{
    AssetOptions, AssetResolver, AssetSet, DirectoryPath, DirectoryRegistry, MatchMode,
    classify_all,
};
use crate::config::AssetsConfig;
use crate::error::AssetError;
use crate::inject;
use crate::registry::{CalledComponents, ComponentId, ComponentRef, IgnoredComponents};
use crate::{debug, log};

#[derive(Debug)]
pub struct RenderContext {
    resolver: AssetResolver,
    called: CalledComponents,
    ignored: IgnoredComponents,
    core: Option<PathBuf>,
    render_count: u64,
}

impl RenderContext {
    /// Build a context from `[assets]` configuration.
    ///
    /// Configured directories are added in order; the native directory is
    /// held back until the first resolution.
    pub fn new(config: &AssetsConfig) -> Result<Self, AssetError> {
        let mut directories = DirectoryRegistry::new(config.native.clone());
        for dir in &config.directories {
            directories.add_directory(dir)?;
        }

        let options = AssetOptions {
            inline: config.inline,
            prefix: config.prefix.clone(),
            public_url: config.public_url.clone(),
        };

        let mut ignored = IgnoredComponents::new();
        for component in &config.ignore {
            ignored.ignore(component);
        }

        Ok(Self {
            resolver: AssetResolver::new(directories, options, config.match_mode),
            called: CalledComponents::new(),
            ignored,
            core: config.core.clone(),
            render_count: 0,
        })
    }

    /// Context searching only `directories`, with default options.
    pub fn with_directories<I, P>(directories: I) -> Result<Self, AssetError>
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self::new(&AssetsConfig::with_directories(directories))
    }

    // ------------------------------------------------------------------------
    // Directories
    // ------------------------------------------------------------------------

    /// Add a search root. Fails once any asset has been resolved.
    pub fn add_directory(&mut self, path: impl AsRef<Path>) -> Result<&mut Self, AssetError> {
        self.resolver.directories_mut().add_directory(path)?;
        Ok(self)
    }

    /// Final search order. Freezes the directory list.
    pub fn directories(&mut self) -> &[DirectoryPath] {
        self.resolver.directories_mut().freeze_and_list()
    }

    pub fn directory_registry(&self) -> &DirectoryRegistry {
        self.resolver.directories()
    }

    pub fn options(&self) -> &AssetOptions {
        self.resolver.options()
    }

    // ------------------------------------------------------------------------
    // Components
    // ------------------------------------------------------------------------

    /// Record a rendered component. Later registrations of the same id are ignored.
    pub fn register(&mut self, id: ComponentId, component: ComponentRef) -> bool {
        let inserted = self.called.register(id.clone(), component);
        if inserted {
            debug!("assets"; "called: {} ({})", id, component.type_name());
        }
        inserted
    }

    pub fn called(&self) -> &CalledComponents {
        &self.called
    }

    /// Suppress a component's assets.
    pub fn ignore(&mut self, component: &str) -> &mut Self {
        if self.ignored.ignore(component) {
            debug!("assets"; "ignoring component: {}", component);
        }
        self
    }

    /// Suppress the component a rendered asset id belongs to.
    pub fn ignore_asset(&mut self, asset_id: &str) -> &mut Self {
        let prefix = self.resolver.options().prefix.clone();
        if self.ignored.ignore_asset(asset_id, &prefix) {
            debug!("assets"; "ignoring asset: {}", asset_id);
        }
        self
    }

    pub fn ignored(&self) -> &IgnoredComponents {
        &self.ignored
    }

    /// Identity token for the next component render in this pass.
    pub fn next_render_token(&mut self) -> u64 {
        self.render_count += 1;
        self.render_count
    }

    // ------------------------------------------------------------------------
    // Assets
    // ------------------------------------------------------------------------

    /// Assets of a single component, searching directories before `fallback`.
    pub fn component_assets(
        &mut self,
        id: &ComponentId,
        fallback: &[PathBuf],
    ) -> Result<&AssetSet, AssetError> {
        self.resolver.resolve(id, fallback)
    }

    /// Assets of every called, non-ignored component, first occurrence of an id wins.
    pub fn enqueued_assets(&mut self) -> Result<AssetSet, AssetError> {
        let mut assets = AssetSet::new();

        for (id, component) in self.called.list_unique() {
            if self.ignored.contains(id.as_str()) {
                debug!("assets"; "skipping ignored component: {}", id);
                continue;
            }
            let resolved = self
                .resolver
                .resolve(id, &component.declared_assets())?;
            for (asset_id, asset) in resolved {
                assets
                    .entry(asset_id.clone())
                    .or_insert_with(|| asset.clone());
            }
        }

        Ok(assets)
    }

    /// Inject the enqueued assets into `html`.
    pub fn inject(&mut self, html: &str) -> Result<String, AssetError> {
        let assets = self.enqueued_assets()?;
        if assets.is_empty() {
            return Ok(html.to_string());
        }

        let tags: Vec<String> = assets.values().map(|asset| asset.to_tag()).collect();
        log!("inject"; "{} asset(s) from {} component(s)", tags.len(), self.called.len());
        Ok(inject::inject(html, &tags))
    }

    /// Every file in the core styles directory. Not cached.
    pub fn core_assets(&self, inline: bool) -> Result<AssetSet, AssetError> {
        let Some(core) = &self.core else {
            return Ok(AssetSet::new());
        };

        let entries = match std::fs::read_dir(core) {
            Ok(entries) => entries,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(AssetSet::new()),
            Err(err) => return Err(AssetError::Io(core.clone(), err)),
        };

        let mut paths = Vec::new();
        for entry in entries {
            match entry {
                Ok(entry) if !entry.path().is_dir() => paths.push(entry.path()),
                Ok(_) => {}
                Err(err) => debug!("assets"; "skipping core entry in {}: {}", core.display(), err),
            }
        }
        paths.sort();

        let options = AssetOptions {
            inline,
            ..self.resolver.options().clone()
        };
        classify_all(&paths, &options)
    }

    /// Match mode in effect for directory searches.
    pub fn match_mode(&self) -> MatchMode {
        self.resolver.match_mode()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn declared_none() -> Vec<PathBuf> {
        Vec::new()
    }

    fn card() -> ComponentRef {
        ComponentRef::new("tests::Card", declared_none)
    }

    fn id(raw: &str) -> ComponentId {
        ComponentId::new(raw).unwrap()
    }

    #[test]
    fn test_enqueued_assets_dedup_and_order() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("card.css"), ".card{}").unwrap();
        fs::write(dir.path().join("toast.css"), ".toast{}").unwrap();
        fs::write(dir.path().join("toast.js"), "1").unwrap();

        let mut ctx = RenderContext::with_directories([dir.path()]).unwrap();
        ctx.register(id("toast"), card());
        ctx.register(id("card"), card());
        ctx.register(id("toast"), card());

        let assets = ctx.enqueued_assets().unwrap();
        let names: Vec<_> = assets
            .values()
            .map(|a| a.path().file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["toast.css", "toast.js", "card.css"]);
    }

    #[test]
    fn test_ignored_components_skipped() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("card.css"), ".card{}").unwrap();
        fs::write(dir.path().join("toast.css"), ".toast{}").unwrap();

        let mut ctx = RenderContext::with_directories([dir.path()]).unwrap();
        ctx.register(id("card"), card());
        ctx.register(id("toast"), card());
        ctx.ignore("Card");

        let assets = ctx.enqueued_assets().unwrap();
        assert_eq!(assets.len(), 1);
        assert!(assets.keys().next().unwrap().starts_with("component-toast-"));
    }

    #[test]
    fn test_ignore_asset_from_id() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("card.css"), ".card{}").unwrap();

        let mut ctx = RenderContext::with_directories([dir.path()]).unwrap();
        ctx.register(id("card"), card());
        let asset_id = ctx.enqueued_assets().unwrap().keys().next().unwrap().clone();

        ctx.ignore_asset(&asset_id);
        assert!(ctx.enqueued_assets().unwrap().is_empty());
    }

    #[test]
    fn test_ignore_variant_asset_suppresses_component() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("button.css"), ".button{}").unwrap();
        fs::write(dir.path().join("button--dark.css"), ".button.dark{}").unwrap();

        let mut ctx = RenderContext::with_directories([dir.path()]).unwrap();
        ctx.register(id("button"), card());
        let assets = ctx.enqueued_assets().unwrap();
        assert_eq!(assets.len(), 2);
        let variant = assets
            .keys()
            .find(|key| key.starts_with("component-button--dark-"))
            .unwrap()
            .clone();

        ctx.ignore_asset(&variant);
        assert!(ctx.ignored().contains("button"));
        assert!(ctx.enqueued_assets().unwrap().is_empty());
    }

    #[test]
    fn test_inject_head() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("card.css"), ".card { color: red; }").unwrap();

        let mut ctx = RenderContext::with_directories([dir.path()]).unwrap();
        ctx.register(id("card"), card());

        let out = ctx.inject("<html><head></head><body/></html>").unwrap();
        assert!(out.starts_with("<html><head>\t<style id=\"component-card-"));
        assert!(out.contains(".card{color:red}</style>\n</head><body/></html>"));
    }

    #[test]
    fn test_inject_nothing_called() {
        let mut ctx = RenderContext::with_directories(Vec::<PathBuf>::new()).unwrap();
        assert_eq!(ctx.inject("<body/>").unwrap(), "<body/>");
    }

    #[test]
    fn test_add_directory_after_resolution_fails() {
        let a = TempDir::new().unwrap();
        let b = TempDir::new().unwrap();

        let mut ctx = RenderContext::with_directories([a.path()]).unwrap();
        ctx.component_assets(&id("card"), &[]).unwrap();

        let before: Vec<_> = ctx.directories().to_vec();
        assert!(matches!(
            ctx.add_directory(b.path()),
            Err(AssetError::Frozen(_))
        ));
        assert_eq!(ctx.directories().to_vec(), before);
    }

    #[test]
    fn test_config_native_searched_last() {
        let native = TempDir::new().unwrap();
        let user = TempDir::new().unwrap();
        fs::write(native.path().join("card.css"), "native{}").unwrap();
        fs::write(user.path().join("card.css"), "user{}").unwrap();

        let config = AssetsConfig {
            directories: vec![native.path().to_path_buf(), user.path().to_path_buf()],
            native: Some(native.path().to_path_buf()),
            ..AssetsConfig::with_directories(Vec::<PathBuf>::new())
        };
        let mut ctx = RenderContext::new(&config).unwrap();
        let set = ctx.component_assets(&id("card"), &[]).unwrap();
        let asset = set.values().next().unwrap();
        assert!(asset.path().starts_with(fs::canonicalize(user.path()).unwrap()));
    }

    #[test]
    fn test_core_assets() {
        let core = TempDir::new().unwrap();
        fs::write(core.path().join("b.js"), "1").unwrap();
        fs::write(core.path().join("a.css"), "a{}").unwrap();

        let config = AssetsConfig {
            core: Some(core.path().to_path_buf()),
            ..AssetsConfig::with_directories(Vec::<PathBuf>::new())
        };
        let ctx = RenderContext::new(&config).unwrap();
        let assets = ctx.core_assets(false).unwrap();
        let paths: Vec<_> = assets.values().map(|a| a.path().to_path_buf()).collect();
        assert_eq!(paths, vec![core.path().join("a.css"), core.path().join("b.js")]);
        assert!(assets.values().all(|a| !a.is_inline()));
    }

    #[test]
    fn test_render_tokens_increase() {
        let mut ctx = RenderContext::with_directories(Vec::<PathBuf>::new()).unwrap();
        let a = ctx.next_render_token();
        let b = ctx.next_render_token();
        assert!(b > a);
    }
}
