#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//! AST-level lint for the inline page scripts and cookie writes.
//!
//! Inline scripts live in `&str` consts under `src/ui`. Every frame or timer
//! they schedule must go through `blogTasks` so leaving the page cancels it:
//!
//! ```ignore
//! // BAD: keeps running after the page is gone
//! setTimeout(next, speed);
//!
//! // GOOD: cancelled on pagehide
//! blogTasks.after(speed, next);
//! ```
//!
//! `TASKS_SCRIPT` is the helper itself and is the only place allowed to call
//! the browser scheduling functions directly.
//!
//! The theme cookie is likewise written in exactly one place,
//! `src/theme/cookie.rs`, so its attributes can't drift between handlers.

use std::fs;
use std::path::Path;
use syn::visit::Visit;
use walkdir::WalkDir;

const TASK_HELPER: &str = "TASKS_SCRIPT";

const RAW_SCHEDULING: &[&str] = &["requestAnimationFrame(", "setTimeout(", "setInterval("];

#[derive(Default)]
struct StringConsts {
    found: Vec<(String, String)>,
}

impl<'ast> Visit<'ast> for StringConsts {
    fn visit_item_const(&mut self, item: &'ast syn::ItemConst) {
        if let syn::Expr::Lit(syn::ExprLit {
            lit: syn::Lit::Str(s),
            ..
        }) = &*item.expr
        {
            self.found.push((item.ident.to_string(), s.value()));
        }
        syn::visit::visit_item_const(self, item);
    }
}

fn rust_files(root: &str) -> Vec<std::path::PathBuf> {
    WalkDir::new(root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "rs"))
        .map(|e| e.into_path())
        .collect()
}

fn script_consts(path: &Path) -> Vec<(String, String)> {
    let content = fs::read_to_string(path).unwrap();
    let syntax = syn::parse_file(&content)
        .unwrap_or_else(|e| panic!("Failed to parse {}: {}", path.display(), e));
    let mut visitor = StringConsts::default();
    visitor.visit_file(&syntax);
    visitor
        .found
        .into_iter()
        .filter(|(name, _)| name.ends_with("_SCRIPT"))
        .collect()
}

#[test]
fn scripts_schedule_through_task_helper() {
    let mut violations = Vec::new();
    let mut scripts = 0;
    let mut helper_seen = false;

    for path in rust_files("src/ui") {
        for (name, body) in script_consts(&path) {
            scripts += 1;
            if name == TASK_HELPER {
                helper_seen = true;
                assert!(
                    body.contains("pagehide"),
                    "{TASK_HELPER} must cancel live handles on pagehide"
                );
                continue;
            }
            for pattern in RAW_SCHEDULING {
                if body.contains(pattern) {
                    violations.push(format!("{}: {} calls {}", path.display(), name, pattern));
                }
            }
        }
    }

    assert!(helper_seen, "{TASK_HELPER} not found under src/ui");
    assert!(scripts > 1, "no page scripts found under src/ui");

    if !violations.is_empty() {
        panic!(
            "\n\nUnmanaged scheduling in page scripts (use blogTasks.frame/after):\n  {}\n",
            violations.join("\n  ")
        );
    }
}

#[test]
fn theme_cookie_written_in_one_place() {
    let allowed = Path::new("src/theme/cookie.rs");
    let offenders: Vec<_> = rust_files("src")
        .into_iter()
        .filter(|path| path.as_path() != allowed)
        .filter(|path| {
            let content = fs::read_to_string(path).unwrap();
            content.contains("Cookie::build") || content.contains("Cookie::new")
        })
        .collect();

    assert!(
        offenders.is_empty(),
        "Cookies built outside src/theme/cookie.rs: {:?}",
        offenders
    );
}
