//! Billing Engine - totals calculation core for the recycling billing stack
//!
//! # Architecture
//!
//! Two parallel, structurally identical pipelines exist, one per billing
//! document type (invoice, weight docket):
//!
//! - **Calculators** (`totals`): pure, stateless functions that take the
//!   live form collections (line items, deductions, transport charges, GST
//!   configuration) and produce per-row totals plus cascading aggregates.
//! - **Recalculation adapters** (`recalc`): bridge a calculator to an
//!   interactive form. Row totals are recomputed synchronously on every
//!   edit; aggregate totals are recomputed only after a quiet period, so
//!   the expensive summary render is not driven on every keystroke.
//!
//! # Module Structure
//!
//! ```text
//! billing-engine/src/
//! ├── totals/        # Pure calculators (invoice, docket) + decimal helpers
//! ├── recalc/        # Debounced recalculation workers and their handles
//! └── common/        # Logging setup
//! ```

pub mod common;
pub mod recalc;
pub mod totals;

// Re-export public types
pub use recalc::{DEBOUNCE_QUIET_PERIOD, DocketRecalc, InvoiceRecalc, RecalcError};
pub use totals::docket::DocketCalcInput;
pub use totals::invoice::InvoiceCalcInput;

// Re-export logger functions
pub use common::logger::{init_logger, init_logger_with_file};
