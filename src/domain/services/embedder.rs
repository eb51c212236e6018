//! Embedder Service
//!
//! Turns source directories into byte-array declarations.
//!
//! ## Ordering
//!
//! Files are emitted in ascending order of their raw file name bytes. The
//! aggregate index uses the same order, and downstream code addresses
//! resources by position, so this order is part of the output contract.
//!
//! ## Failure
//!
//! Any listing or read failure aborts the whole unit. Nothing is returned
//! for partially read groups.

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::domain::entities::{
    Artifact, GeneratedUnit, GroupSummary, HeaderConstant, ResourceEntry, ResourceFile,
    SourceDirectory,
};
use crate::domain::ports::ResourceStore;
use crate::domain::services::render::{
    render_array, render_index, render_preamble, DEFAULT_GENERATOR,
};
use crate::domain::value_objects::{stem, CollisionPolicy, Identifier};
use crate::error::{EmbedError, EmbedResult};

/// Renders directories through a `ResourceStore`
pub struct Embedder<'a, S: ResourceStore + ?Sized> {
    store: &'a S,
    collision_policy: CollisionPolicy,
    generated_by: String,
}

impl<'a, S: ResourceStore + ?Sized> Embedder<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self {
            store,
            collision_policy: CollisionPolicy::default(),
            generated_by: DEFAULT_GENERATOR.to_string(),
        }
    }

    pub fn with_collision_policy(mut self, policy: CollisionPolicy) -> Self {
        self.collision_policy = policy;
        self
    }

    /// Name written into the provenance comment
    pub fn with_generated_by(mut self, name: impl Into<String>) -> Self {
        self.generated_by = name.into();
        self
    }

    /// Files of `source` in index order, with in-group collisions checked.
    /// Nothing is read.
    pub fn entries(&self, source: &SourceDirectory) -> EmbedResult<Vec<ResourceEntry>> {
        let mut names = self.store.list_files(source.path())?;
        names.sort();

        let mut seen: HashMap<Identifier, String> = HashMap::with_capacity(names.len());
        let mut entries = Vec::with_capacity(names.len());

        for name in names {
            let file_name = name.to_string_lossy().into_owned();
            let identifier = Identifier::resource(source.name(), stem(&file_name));

            if let Some(first) = seen.get(&identifier) {
                self.on_collision(source.name(), &identifier, first, &file_name)?;
            } else {
                seen.insert(identifier.clone(), file_name.clone());
            }

            entries.push(ResourceEntry {
                path: source.path().join(&name),
                file_name,
                identifier,
            });
        }

        Ok(entries)
    }

    /// Read every file of `source` in index order.
    pub fn scan(&self, source: &SourceDirectory) -> EmbedResult<Vec<ResourceFile>> {
        self.entries(source)?
            .into_iter()
            .map(|entry| {
                let bytes = self.store.read_bytes(&entry.path)?;
                debug!(
                    group = %source.name(),
                    file = %entry.file_name,
                    identifier = %entry.identifier,
                    bytes = bytes.len(),
                    "embedding resource"
                );
                Ok(ResourceFile::new(entry.file_name, entry.identifier, bytes))
            })
            .collect()
    }

    /// Entries of every group, checked for collisions across the whole
    /// unit exactly as `render_generated_unit` does.
    pub fn list_unit(
        &self,
        groups: &[SourceDirectory],
        constants: &[HeaderConstant],
    ) -> EmbedResult<Vec<Vec<ResourceEntry>>> {
        let mut declared = self.declare_constants(constants)?;
        groups
            .iter()
            .map(|source| {
                let entries = self.entries(source)?;
                self.declare_group(
                    &mut declared,
                    source,
                    entries.iter().map(|e| (e.file_name.as_str(), &e.identifier)),
                )?;
                Ok(entries)
            })
            .collect()
    }

    /// Per-file arrays of `source` followed by its aggregate index.
    pub fn render_directory(&self, source: &SourceDirectory) -> EmbedResult<String> {
        let files = self.scan(source)?;
        Ok(render_files(source, &files))
    }

    /// Complete header text: preamble, then every group in the given order.
    pub fn render_generated_unit(
        &self,
        groups: &[SourceDirectory],
        constants: &[HeaderConstant],
    ) -> EmbedResult<GeneratedUnit> {
        let mut content = render_preamble(&self.generated_by, constants);
        let mut summaries = Vec::with_capacity(groups.len());
        let mut declared = self.declare_constants(constants)?;

        for source in groups {
            let files = self.scan(source)?;
            self.declare_group(
                &mut declared,
                source,
                files.iter().map(|f| (f.file_name(), f.identifier())),
            )?;

            content.push_str(&render_files(source, &files));
            summaries.push(GroupSummary {
                name: source.name().to_string(),
                files: files.len(),
                bytes: files.iter().map(ResourceFile::len).sum(),
            });
        }

        Ok(GeneratedUnit::new(content, summaries))
    }

    pub fn render_artifact(&self, artifact: &Artifact) -> EmbedResult<GeneratedUnit> {
        self.render_generated_unit(artifact.groups(), artifact.constants())
    }

    fn declare_constants(
        &self,
        constants: &[HeaderConstant],
    ) -> EmbedResult<HashMap<Identifier, String>> {
        let mut declared = HashMap::new();
        for constant in constants {
            let origin = format!("constant {}", constant.name);
            self.declare(&mut declared, &constant.name, "header", origin)?;
        }
        Ok(declared)
    }

    fn declare_group<'f>(
        &self,
        declared: &mut HashMap<Identifier, String>,
        source: &SourceDirectory,
        files: impl IntoIterator<Item = (&'f str, &'f Identifier)>,
    ) -> EmbedResult<()> {
        let scope = source.name().as_str();
        self.declare(declared, source.name(), scope, format!("group {}", scope))?;
        for (file_name, identifier) in files {
            let origin = format!("{}/{}", scope, file_name);
            self.declare(declared, identifier, scope, origin)?;
        }
        Ok(())
    }

    /// Record a top-level declaration and enforce uniqueness across groups.
    ///
    /// Collisions inside one group are already reported by `scan`, so a
    /// repeated identifier from the same group is skipped here.
    fn declare(
        &self,
        declared: &mut HashMap<Identifier, String>,
        identifier: &Identifier,
        scope: &str,
        origin: String,
    ) -> EmbedResult<()> {
        match declared.get(identifier) {
            Some(first) if !same_scope(first, scope) => {
                let first = first.clone();
                self.on_collision_in(scope, identifier, &first, &origin)
            }
            Some(_) => Ok(()),
            None => {
                declared.insert(identifier.clone(), origin);
                Ok(())
            }
        }
    }

    fn on_collision(
        &self,
        group: &Identifier,
        identifier: &Identifier,
        first: &str,
        second: &str,
    ) -> EmbedResult<()> {
        self.on_collision_in(group.as_str(), identifier, first, second)
    }

    fn on_collision_in(
        &self,
        group: &str,
        identifier: &Identifier,
        first: &str,
        second: &str,
    ) -> EmbedResult<()> {
        match self.collision_policy {
            CollisionPolicy::Error => Err(EmbedError::IdentifierCollision {
                group: group.to_string(),
                identifier: identifier.to_string(),
                first: first.to_string(),
                second: second.to_string(),
            }),
            CollisionPolicy::Allow => {
                warn!(
                    group,
                    identifier = %identifier,
                    first,
                    second,
                    "duplicate identifier emitted"
                );
                Ok(())
            }
        }
    }
}

/// Origins are recorded as `GROUP/file` or `group GROUP`.
fn same_scope(origin: &str, scope: &str) -> bool {
    origin
        .split_once('/')
        .is_some_and(|(group, _)| group == scope)
}

fn render_files(source: &SourceDirectory, files: &[ResourceFile]) -> String {
    let mut out = String::new();
    for file in files {
        out.push_str(&render_array(
            file.identifier(),
            file.bytes(),
            source.terminator(),
        ));
    }
    out.push_str(&render_index(
        source.name(),
        files.iter().map(ResourceFile::identifier),
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::fs::MockStore;
    use std::path::Path;

    fn ident(s: &str) -> Identifier {
        Identifier::new(s).unwrap()
    }

    fn queries_store() -> MockStore {
        let store = MockStore::new();
        // Inserted out of order; listing order must not leak into output.
        store.add_file("/pack/queries/q2.sql", b"*");
        store.add_file("/pack/queries/q1.sql", b"SEL");
        store
    }

    #[test]
    fn render_directory_matches_documented_scenario() {
        let store = queries_store();
        let embedder = Embedder::new(&store);
        let source = SourceDirectory::new(ident("Q"), "/pack/queries", true);

        let text = embedder.render_directory(&source).unwrap();

        assert_eq!(
            text,
            "const uint8_t Q_q1[] = {83, 69, 76, 0};\n\
             const uint8_t Q_q2[] = {42, 0};\n\
             const char *Q[] = {\n\t(const char*) Q_q1,\n\t(const char*) Q_q2\n};\n"
        );
    }

    #[test]
    fn render_directory_without_terminator() {
        let store = queries_store();
        let embedder = Embedder::new(&store);
        let source = SourceDirectory::new(ident("Q"), "/pack/queries", false);

        let text = embedder.render_directory(&source).unwrap();

        assert!(text.contains("const uint8_t Q_q1[] = {83, 69, 76};\n"));
        assert!(text.contains("const uint8_t Q_q2[] = {42};\n"));
    }

    #[test]
    fn render_directory_is_deterministic() {
        let store = queries_store();
        let embedder = Embedder::new(&store);
        let source = SourceDirectory::new(ident("Q"), "/pack/queries", true);

        let first = embedder.render_directory(&source).unwrap();
        let second = embedder.render_directory(&source).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn empty_directory_renders_empty_index() {
        let store = MockStore::new();
        store.add_dir("/pack/empty");
        let embedder = Embedder::new(&store);
        let source = SourceDirectory::new(ident("EMPTY"), "/pack/empty", true);

        let text = embedder.render_directory(&source).unwrap();
        assert_eq!(text, "const char *EMPTY[] = {\n};\n");
    }

    #[test]
    fn missing_directory_is_an_error() {
        let store = MockStore::new();
        let embedder = Embedder::new(&store);
        let source = SourceDirectory::new(ident("Q"), "/nope", true);

        let err = embedder.render_directory(&source).unwrap_err();
        assert!(matches!(err, EmbedError::DirectoryNotFound { .. }));
    }

    #[test]
    fn unreadable_file_aborts_render() {
        let store = queries_store();
        store.fail_read("/pack/queries/q2.sql");
        let embedder = Embedder::new(&store);
        let source = SourceDirectory::new(ident("Q"), "/pack/queries", true);

        let err = embedder.render_directory(&source).unwrap_err();
        match err {
            EmbedError::ResourceReadError { path, .. } => {
                assert_eq!(path, Path::new("/pack/queries/q2.sql"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn stem_collision_fails_by_default() {
        let store = MockStore::new();
        store.add_file("/pack/mixed/q1.sql", b"a");
        store.add_file("/pack/mixed/q1.txt", b"b");
        let embedder = Embedder::new(&store);
        let source = SourceDirectory::new(ident("M"), "/pack/mixed", true);

        let err = embedder.render_directory(&source).unwrap_err();
        match err {
            EmbedError::IdentifierCollision {
                identifier,
                first,
                second,
                ..
            } => {
                assert_eq!(identifier, "M_q1");
                assert_eq!(first, "q1.sql");
                assert_eq!(second, "q1.txt");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn sanitizing_collision_is_detected() {
        let store = MockStore::new();
        store.add_file("/pack/mixed/a-b.csv", b"1");
        store.add_file("/pack/mixed/a_b.csv", b"2");
        let embedder = Embedder::new(&store);
        let source = SourceDirectory::new(ident("M"), "/pack/mixed", true);

        assert!(matches!(
            embedder.render_directory(&source),
            Err(EmbedError::IdentifierCollision { .. })
        ));
    }

    #[test]
    fn stem_collision_allowed_emits_both() {
        let store = MockStore::new();
        store.add_file("/pack/mixed/q1.sql", b"a");
        store.add_file("/pack/mixed/q1.txt", b"b");
        let embedder = Embedder::new(&store).with_collision_policy(CollisionPolicy::Allow);
        let source = SourceDirectory::new(ident("M"), "/pack/mixed", false);

        let text = embedder.render_directory(&source).unwrap();
        assert_eq!(
            text,
            "const uint8_t M_q1[] = {97};\n\
             const uint8_t M_q1[] = {98};\n\
             const char *M[] = {\n\t(const char*) M_q1,\n\t(const char*) M_q1\n};\n"
        );
    }

    #[test]
    fn generated_unit_keeps_group_order() {
        let store = queries_store();
        store.add_file("/pack/answers/q1.csv", b"1");
        let embedder = Embedder::new(&store).with_generated_by("generate_csv_header.py");
        let groups = vec![
            SourceDirectory::new(ident("ZZ_QUERIES"), "/pack/queries", true),
            SourceDirectory::new(ident("AA_ANSWERS"), "/pack/answers", true),
        ];
        let constants = vec![HeaderConstant::new(ident("QUERY_COUNT"), 2)];

        let unit = embedder.render_generated_unit(&groups, &constants).unwrap();
        let text = unit.content();

        assert!(text.starts_with(
            "/* THIS FILE WAS AUTOMATICALLY GENERATED BY generate_csv_header.py */\n\n\
             #pragma once\n\nconst int QUERY_COUNT = 2;\nconst uint8_t ZZ_QUERIES_q1[]"
        ));
        let queries = text.find("const char *ZZ_QUERIES[]").unwrap();
        let answers = text.find("const uint8_t AA_ANSWERS_q1[]").unwrap();
        assert!(queries < answers);

        assert_eq!(unit.groups().len(), 2);
        assert_eq!(unit.groups()[0].name, "ZZ_QUERIES");
        assert_eq!(unit.groups()[0].files, 2);
        assert_eq!(unit.groups()[0].bytes, 4);
        assert_eq!(unit.file_count(), 3);
    }

    #[test]
    fn generated_unit_detects_cross_group_collision() {
        let store = MockStore::new();
        store.add_file("/pack/q/a_x.sql", b"1");
        store.add_file("/pack/qa/x.sql", b"2");
        let embedder = Embedder::new(&store);
        let groups = vec![
            SourceDirectory::new(ident("Q"), "/pack/q", true),
            SourceDirectory::new(ident("Q_a"), "/pack/qa", true),
        ];

        let err = embedder.render_generated_unit(&groups, &[]).unwrap_err();
        match err {
            EmbedError::IdentifierCollision {
                identifier, first, ..
            } => {
                assert_eq!(identifier, "Q_a_x");
                assert_eq!(first, "Q/a_x.sql");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn generated_unit_detects_group_named_like_constant() {
        let store = MockStore::new();
        store.add_dir("/pack/q");
        let embedder = Embedder::new(&store);
        let groups = vec![SourceDirectory::new(ident("COUNT"), "/pack/q", true)];
        let constants = vec![HeaderConstant::new(ident("COUNT"), 0)];

        assert!(matches!(
            embedder.render_generated_unit(&groups, &constants),
            Err(EmbedError::IdentifierCollision { .. })
        ));
    }

    #[test]
    fn list_unit_reads_nothing() {
        let store = queries_store();
        let embedder = Embedder::new(&store);
        let groups = vec![SourceDirectory::new(ident("Q"), "/pack/queries", true)];

        let listed = embedder.list_unit(&groups, &[]).unwrap();

        let names: Vec<_> = listed[0].iter().map(|e| e.file_name.as_str()).collect();
        assert_eq!(names, vec!["q1.sql", "q2.sql"]);
        assert_eq!(listed[0][1].path, Path::new("/pack/queries/q2.sql"));
        assert_eq!(store.read_count(), 0);
    }

    #[test]
    fn list_unit_detects_cross_group_collision() {
        let store = MockStore::new();
        store.add_file("/pack/q/a_x.sql", b"1");
        store.add_file("/pack/qa/x.sql", b"2");
        let embedder = Embedder::new(&store);
        let groups = vec![
            SourceDirectory::new(ident("Q"), "/pack/q", true),
            SourceDirectory::new(ident("Q_a"), "/pack/qa", true),
        ];

        assert!(matches!(
            embedder.list_unit(&groups, &[]),
            Err(EmbedError::IdentifierCollision { .. })
        ));
    }

    #[test]
    fn failing_group_aborts_whole_unit() {
        let store = queries_store();
        let embedder = Embedder::new(&store);
        let groups = vec![
            SourceDirectory::new(ident("Q"), "/pack/queries", true),
            SourceDirectory::new(ident("A"), "/pack/missing", true),
        ];

        assert!(matches!(
            embedder.render_generated_unit(&groups, &[]),
            Err(EmbedError::DirectoryNotFound { .. })
        ));
    }
}
