/// Request body types with client-side validation
pub mod requests;
/// Response payload types found under the envelope's `data` field
pub mod responses;
