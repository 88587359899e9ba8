pub mod blob;
pub mod commit;
pub mod object;
pub mod object_id;
pub mod tracked;

/// Length of a full hex fingerprint
pub const FINGERPRINT_LENGTH: usize = 40;

/// Length of a commit record's filename inside its bucket.
///
/// The first two fingerprint characters select the bucket, so a commit
/// record's filename is exactly 38 characters. Blob filenames carry the
/// original filename appended after the fingerprint remainder and are
/// therefore always longer, which is how the two are told apart.
pub const COMMIT_RECORD_NAME_LENGTH: usize = FINGERPRINT_LENGTH - 2;
