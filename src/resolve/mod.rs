//! Recursive expansion of `include:` directives.
//!
//! A list may pull other lists in with `include:<name>` lines. The resolver
//! follows those edges depth-first and returns the union of every plain entry
//! it saw. Each distinct URL is fetched at most once per [`Resolver::resolve`]
//! call, which also makes cyclic and diamond-shaped include graphs terminate.

mod template;

use std::collections::HashSet;
use std::sync::Arc;

use futures::future::{BoxFuture, FutureExt};
use log::{debug, warn};

use crate::config::INCLUDE_DIRECTIVE;
use crate::error_handling::ResolveError;
use crate::fetch::FetchLines;

pub use template::{normalize_url, IncludeTemplate};

/// Expands a root list and everything it includes.
#[derive(Debug)]
pub struct Resolver<F> {
    fetcher: Arc<F>,
    template: IncludeTemplate,
}

/// State threaded through one top-level resolution.
struct Walk {
    visited: HashSet<String>,
    entries: HashSet<String>,
    chain: Vec<String>,
}

impl<F: FetchLines> Resolver<F> {
    pub fn new(fetcher: Arc<F>, template: IncludeTemplate) -> Self {
        Self { fetcher, template }
    }

    /// Returns the set of plain entries reachable from `root`.
    ///
    /// # Errors
    ///
    /// Any fetch failure anywhere in the include graph aborts the whole call;
    /// the error names the failing URL and the include chain leading to it.
    pub async fn resolve(&self, root: &str) -> Result<HashSet<String>, ResolveError> {
        let mut walk = Walk {
            visited: HashSet::new(),
            entries: HashSet::new(),
            chain: Vec::new(),
        };
        self.expand(normalize_url(root), &mut walk).await?;
        debug!(
            "Resolved {root}: {} lists, {} entries",
            walk.visited.len(),
            walk.entries.len()
        );
        Ok(walk.entries)
    }

    fn expand<'a>(&'a self, url: String, walk: &'a mut Walk) -> BoxFuture<'a, Result<(), ResolveError>> {
        async move {
            if !walk.visited.insert(url.clone()) {
                debug!("Skipping already visited list {url}");
                return Ok(());
            }

            debug!("Expanding list {url}");
            let lines = self
                .fetcher
                .fetch_lines(&url)
                .await
                .map_err(|source| ResolveError::Fetch {
                    url: url.clone(),
                    include_chain: walk.chain.clone(),
                    source,
                })?;

            for line in lines {
                match line.strip_prefix(INCLUDE_DIRECTIVE) {
                    Some(name) => {
                        let name = name.trim();
                        if name.is_empty() {
                            warn!("Ignoring empty include directive in {url}");
                            continue;
                        }
                        let included = normalize_url(&self.template.url_for(name));
                        walk.chain.push(url.clone());
                        let result = self.expand(included, walk).await;
                        walk.chain.pop();
                        result?;
                    }
                    None => {
                        walk.entries.insert(line);
                    }
                }
            }
            Ok(())
        }
        .boxed()
    }
}
