//! Supabase (PostgREST) persistence
//!
//! The schema is owned by Supabase; this module only reads and writes rows
//! through the REST interface with `eq` / `lte` filters.

pub mod repositories;
pub mod supabase;

pub use repositories::{
    SupabaseMessageRepository, SupabaseMetricsRecorder, SupabasePostRepository,
    SupabaseScheduledPostRepository,
};
pub use supabase::{Filter, SupabaseClient};
