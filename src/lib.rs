//! # placelint
//!
//! Static checker for object-literal component definitions. Walks parsed
//! JS/TS/JSX/TSX sources, finds component literals, and verifies that named
//! fields sit under the correct sub-object among `style`, `props`, and `on`.
//!
//! ## Placement Invariants
//!
//! 1. **Component detection**: an object literal is a component iff its
//!    direct static key set contains any of `extend`, `props`, `style`, `on`.
//! 2. **Fixed check order**: sub-objects are validated props, then style,
//!    then on; fields in declaration order. Diagnostic order is discovery
//!    order and is reproducible across runs.
//! 3. **Prefix rule**: `data-*` / `aria-*` names classify as attributes
//!    independently of the literal tables, wherever attribute-ness matters.
//! 4. **`on` heuristic**: deny-by-default. A field is accepted only if it
//!    starts with `on` or is one of mouseenter, mouseleave, click, keydown,
//!    keyup. This asymmetry with the table-driven checks is deliberate.
//! 5. **Severity split**: `error` is reserved for per-file parse failure
//!    (exactly one, at 1:1, file skipped, run continues); every placement
//!    finding is a `warning`. Success means zero errors, regardless of
//!    warning count.
//! 6. **No pruning**: nested object literals inside an already-matched
//!    component are still visited and re-tested independently.

mod component;
mod validator;
mod walker;

pub mod classify;
pub mod cli;
pub mod diagnostics;
pub mod discovery;
pub mod lint;
pub mod output;

pub use component::is_component;
pub use diagnostics::{Diagnostic, LintResult, Severity};
pub use discovery::{resolve_files, LintConfig};
pub use lint::{run_lint, run_lint_sources};
pub use walker::lint_source;
