// Typed access to the duck-typed `profiles` collection.
// Everything downstream of this module sees named fields and normalized
// sequences, never raw row-image JSON.

pub mod fields;
pub mod normalize;
pub mod record;

pub use record::ProfileRecord;
