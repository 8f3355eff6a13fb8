//! Template parameter-resolution engine.
//!
//! Rendering a template runs a two-pass pipeline over one parsed
//! template:
//!
//! 1. **Discovery** — execute the template with a collect-only `param`
//!    resolver, producing the deduplicated set of referenced keys.
//!    No store I/O happens in this pass.
//! 2. **Resolution** — bulk-read the key set in batches of at most
//!    [`BULK_GET_LIMIT`](crate::core::store::BULK_GET_LIMIT) keys.
//! 3. **Render** — execute the template again with a substituting
//!    resolver, streaming output into the destination writer.
//!
//! Discovery is execution-driven: a reference inside a branch the
//! template logic does not reach during the discovery pass is never
//! resolved. Since both passes run with the same (empty) context, such
//! a branch is equally unreachable at render time.

mod resolve;
mod resolver;

pub use resolve::resolve_keys;
pub use resolver::{KeyCollector, ReferenceResolver, ValueSubstituter};

use std::collections::{BTreeMap, BTreeSet};
use std::io::Write;

use tera::Tera;
use tracing::debug;

use crate::core::path::PathPrefix;
use crate::core::store::ParameterStore;
use crate::error::{Result, TemplateError};
use resolver::{ParamFn, PARAM_FN};

/// A parsed template plus its source name for diagnostics.
///
/// Parsed once per invocation; both pipeline passes execute the same
/// parse result with a different `param` binding.
#[derive(Debug)]
pub struct Template {
    tera: Tera,
    name: String,
}

impl Template {
    /// Parse template source.
    ///
    /// Fails with [`TemplateError::Parse`] on malformed syntax; the
    /// detail carries the engine's position information.
    pub fn parse(name: &str, source: &str) -> Result<Self> {
        let mut tera = Tera::default();
        // Output is config text, not markup; never escape values.
        tera.autoescape_on(vec![]);
        tera.add_raw_template(name, source)
            .map_err(|err| TemplateError::Parse {
                name: name.to_string(),
                detail: error_detail(&err),
            })?;

        Ok(Self {
            tera,
            name: name.to_string(),
        })
    }

    /// Discovery pass: collect every parameter key the template
    /// references when executed, normalized against `prefix`.
    ///
    /// The rendered output of this pass is discarded.
    pub fn discover(&mut self, prefix: &PathPrefix) -> Result<BTreeSet<String>> {
        let collector = KeyCollector::new();
        self.tera
            .register_function(PARAM_FN, ParamFn::new(prefix.clone(), collector.clone()));

        self.tera
            .render(&self.name, &tera::Context::new())
            .map_err(|err| self.render_error(&err))?;

        Ok(collector.keys())
    }

    /// Render pass: execute the template with resolved values, writing
    /// output incrementally to `out`.
    pub fn render_to<W: Write>(
        &mut self,
        prefix: &PathPrefix,
        values: &BTreeMap<String, String>,
        out: W,
    ) -> Result<()> {
        self.tera.register_function(
            PARAM_FN,
            ParamFn::new(prefix.clone(), ValueSubstituter::new(values.clone())),
        );

        self.tera
            .render_to(&self.name, &tera::Context::new(), out)
            .map_err(|err| self.render_error(&err))?;

        Ok(())
    }

    fn render_error(&self, err: &tera::Error) -> TemplateError {
        TemplateError::Render {
            name: self.name.clone(),
            detail: error_detail(err),
        }
    }
}

/// Run the full pipeline: parse, discover, resolve, render.
pub fn render_template<S: ParameterStore, W: Write>(
    store: &S,
    name: &str,
    source: &str,
    prefix: &PathPrefix,
    out: W,
) -> Result<()> {
    let mut template = Template::parse(name, source)?;

    let keys = template.discover(prefix)?;
    debug!(references = keys.len(), "discovered parameter references");

    let values = resolve_keys(store, &keys)?;
    template.render_to(prefix, &values, out)
}

/// Flatten a tera error and its source chain into one line.
///
/// Tera reports position detail (line/column) through the chain, not
/// the top-level message.
fn error_detail(err: &tera::Error) -> String {
    let mut detail = err.to_string();
    let mut source = std::error::Error::source(err);
    while let Some(err) = source {
        detail.push_str(": ");
        detail.push_str(&err.to_string());
        source = err.source();
    }
    detail
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::store::memory::MemoryStore;
    use crate::error::Error;

    fn prefix(p: &str) -> PathPrefix {
        PathPrefix::new(p)
    }

    #[test]
    fn parse_error_reports_template_name() {
        let err = Template::parse("broken.tmpl", "{% if %}").unwrap_err();
        match err {
            Error::Template(TemplateError::Parse { name, .. }) => {
                assert_eq!(name, "broken.tmpl");
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn discovery_deduplicates_references() {
        let source = r#"{{ param(name="a") }}-{{ param(name="b") }}-{{ param(name="a") }}"#;
        let mut template = Template::parse("t", source).unwrap();

        let keys = template.discover(&prefix("/app/")).unwrap();

        assert_eq!(keys.len(), 2);
        assert!(keys.contains("/app/a"));
        assert!(keys.contains("/app/b"));
    }

    #[test]
    fn references_in_untaken_branches_are_not_discovered() {
        let source = r#"{% if false %}{{ param(name="hidden") }}{% endif %}ok"#;
        let mut template = Template::parse("t", source).unwrap();

        let keys = template.discover(&prefix("/app/")).unwrap();
        assert!(keys.is_empty());
    }

    #[test]
    fn render_substitutes_resolved_values() {
        let source = r#"password={{ param(name="db_pass") }}"#;
        let mut template = Template::parse("t", source).unwrap();
        let p = prefix("/app/");

        let keys = template.discover(&p).unwrap();
        assert_eq!(keys, ["/app/db_pass".to_string()].into_iter().collect());

        let mut values = BTreeMap::new();
        values.insert("/app/db_pass".to_string(), "hunter2".to_string());

        let mut out = Vec::new();
        template.render_to(&p, &values, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "password=hunter2");
    }

    #[test]
    fn pipeline_substitutes_empty_for_missing_keys() {
        let store = MemoryStore::new();
        let source = r#"missing=[{{ param(name="/app/missing") }}]"#;

        let mut out = Vec::new();
        render_template(&store, "t", source, &prefix(""), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "missing=[]");
    }

    #[test]
    fn pipeline_round_trip_with_prefix() {
        let store = MemoryStore::new();
        store.insert("/app/db_pass", "hunter2");
        let source = r#"password={{ param(name="db_pass") }}"#;

        let mut out = Vec::new();
        render_template(&store, "t", source, &prefix("/app/"), &mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "password=hunter2");
        assert_eq!(
            store.bulk_requests(),
            vec![vec!["/app/db_pass".to_string()]]
        );
    }

    #[test]
    fn template_without_references_makes_no_store_calls() {
        let store = MemoryStore::new();

        let mut out = Vec::new();
        render_template(&store, "t", "static text\n", &prefix(""), &mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "static text\n");
        assert!(store.bulk_requests().is_empty());
    }

    #[test]
    fn param_without_name_argument_is_a_render_error() {
        let mut template = Template::parse("t", "{{ param() }}").unwrap();
        let err = template.discover(&prefix("/")).unwrap_err();
        assert!(matches!(
            err,
            Error::Template(TemplateError::Render { .. })
        ));
    }
}
