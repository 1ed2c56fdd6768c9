//! View feeders: pure transforms from aggregates into chart-ready payloads.
//!
//! Each feeder consumes the filtered subset and emits exactly the shape its
//! chart needs; none of them hold state or talk to a rendering toolkit. All
//! payloads are serializable so any presentation layer can consume them.
//!
//! - [`bar`]: descending `(label, value)` pairs plus a height hint
//! - [`heatmap`]: region × role matrix, top roles only, 0-filled
//! - [`pie`]: top-8-plus-`Outros` slices for region and role
//! - [`stacked`]: role composition of the top-8 municipalities
//! - [`treemap`]: region → municipality hierarchy

pub mod bar;
pub mod heatmap;
pub mod pie;
pub mod stacked;
pub mod treemap;

pub use bar::{bar_chart, BarChart};
pub use heatmap::{heatmap, Heatmap};
pub use pie::{pie, PieChart};
pub use stacked::{stacked, StackedComposition, StackedSeries};
pub use treemap::{treemap, Treemap};
