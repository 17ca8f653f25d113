//! kitmatch: rental equipment recommendations.
//!
//! kitmatch turns a free-text description of a shoot ("vlog outdoor, murah, ringan") into a
//! ranked shortlist of equipment kits from a rental catalog. Requests are tokenized, mapped
//! onto canonical tags, and scored either by text similarity against the catalog or by
//! weighted tag matching. Every result carries a one-line justification.

#![warn(missing_docs)]

pub mod cli;
