//! The workshop rubric.
//!
//! One submodule per workshop lesson. Predicates work on raw text with
//! substring and pattern matching; nothing here parses a Dockerfile or a
//! compose manifest into a syntax tree. Each predicate documents where that
//! heuristic can misjudge.

mod application;
mod best_practices;
mod bind_mounts;
mod compose;
mod dockerfile;
mod multi_container;
mod persistence;
mod share;
pub mod text;

use crate::artifact::Artifact;
use crate::check::{CheckDef, Registry};

/// Tag used for the throwaway build in "Image builds successfully".
pub const BUILD_TAG: &str = "todo-app-test";

/// Lesson titles, keyed by module number.
const MODULE_TITLES: &[(u32, &str)] = &[
    (4, "Containerize an Application"),
    (5, "Update the Application"),
    (6, "Share the Application"),
    (7, "Persist the DB"),
    (8, "Use Bind Mounts"),
    (9, "Multi-Container Apps"),
    (10, "Use Docker Compose"),
    (11, "Image-Building Best Practices"),
];

/// Title of a workshop module, if it is one the rubric knows.
pub fn module_title(module: u32) -> Option<&'static str> {
    MODULE_TITLES.iter().find(|(n, _)| *n == module).map(|(_, title)| *title)
}

/// The full workshop rubric, in grading order.
pub fn workshop_registry() -> Registry {
    use Artifact::{Compose, Dockerfile, IndexHtml, PackageManifest};

    Registry::new(vec![
        // Module 04: Containerize an Application (25 pts)
        CheckDef::new("Dockerfile exists", 5, 4, |ctx| dockerfile::exists(ctx.project)),
        CheckDef::new("FROM node base image", 3, 4, |ctx| {
            dockerfile::from_node(&ctx.read(Dockerfile))
        }),
        CheckDef::new("WORKDIR set to /app", 2, 4, |ctx| {
            dockerfile::workdir(&ctx.read(Dockerfile))
        }),
        CheckDef::new("COPY package.json first", 3, 4, |ctx| {
            dockerfile::copy_package_first(&ctx.read(Dockerfile))
        }),
        CheckDef::new("RUN npm/yarn install", 3, 4, |ctx| {
            dockerfile::run_install(&ctx.read(Dockerfile))
        }),
        CheckDef::new("COPY source code", 2, 4, |ctx| {
            dockerfile::copy_source(&ctx.read(Dockerfile))
        }),
        CheckDef::new("EXPOSE 3000", 2, 4, |ctx| dockerfile::expose(&ctx.read(Dockerfile))),
        CheckDef::new("CMD defined", 3, 4, |ctx| dockerfile::cmd(&ctx.read(Dockerfile))),
        CheckDef::new("Image builds successfully", 2, 4, dockerfile::image_builds),
        // Module 05: Update the Application (10 pts)
        CheckDef::new("Source code modified", 5, 5, |ctx| {
            application::source_modified(&ctx.read(IndexHtml))
        }),
        CheckDef::new("Empty state text changed", 5, 5, |ctx| {
            application::empty_state_changed(&ctx.read(IndexHtml))
        }),
        // Module 06: Share the Application (10 pts)
        CheckDef::new("Image tagged correctly", 5, 6, |ctx| share::image_tagged(ctx.engine)),
        CheckDef::new("Tag format valid", 5, 6, |ctx| share::tag_format(ctx.engine)),
        // Module 07: Persist the DB (10 pts)
        CheckDef::new("Volume config present", 5, 7, |ctx| {
            persistence::volume_config(&ctx.read(Compose), ctx.engine)
        }),
        CheckDef::new("Volume mount path correct", 5, 7, |ctx| {
            persistence::volume_mount_path(&ctx.read(Compose), ctx.engine)
        }),
        // Module 08: Use Bind Mounts (10 pts)
        CheckDef::new("Bind mount configured", 5, 8, |ctx| {
            bind_mounts::bind_mount(&ctx.read(Compose), &ctx.read(Dockerfile))
        }),
        CheckDef::new("Dev workflow configured", 5, 8, |ctx| {
            bind_mounts::dev_workflow(&ctx.read(PackageManifest))
        }),
        // Module 09: Multi-Container Apps (15 pts)
        CheckDef::new("MYSQL_HOST env var", 5, 9, |ctx| {
            multi_container::mysql_host(&ctx.read(Compose))
        }),
        CheckDef::new("MySQL credentials", 5, 9, |ctx| {
            multi_container::mysql_credentials(&ctx.read(Compose))
        }),
        CheckDef::new("Multi-container network", 5, 9, |ctx| {
            multi_container::network(&ctx.read(Compose))
        }),
        // Module 10: Use Docker Compose (15 pts)
        CheckDef::new("Compose file exists", 3, 10, |ctx| compose::exists(ctx.project)),
        CheckDef::new("App service defined", 3, 10, |ctx| compose::app_service(&ctx.read(Compose))),
        CheckDef::new("MySQL service defined", 3, 10, |ctx| {
            compose::mysql_service(&ctx.read(Compose))
        }),
        CheckDef::new("Volumes defined", 3, 10, |ctx| compose::volumes(&ctx.read(Compose))),
        CheckDef::new("Ports mapped", 3, 10, |ctx| compose::ports(&ctx.read(Compose))),
        // Module 11: Image-Building Best Practices (5 pts)
        CheckDef::new("Multi-stage Dockerfile", 3, 11, |ctx| {
            best_practices::multi_stage(&ctx.read(Dockerfile))
        }),
        CheckDef::new(".dockerignore exists", 2, 11, |ctx| {
            best_practices::dockerignore(ctx.project)
        }),
    ])
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
