/// Application name
pub const APP_NAME: &str = "Moments";

/// Storage key for the events collection
pub const EVENTS_KEY: &str = "moments_events";

/// Storage key for the media collection
pub const MEDIA_KEY: &str = "moments_media";

/// Maximum length of the name-derived slug prefix in an event id
pub const EVENT_SLUG_MAX_LEN: usize = 20;

/// Random suffix length for event ids
pub const EVENT_SUFFIX_LEN: usize = 6;

/// Random suffix length for media ids
pub const MEDIA_SUFFIX_LEN: usize = 9;

/// Bounded attempts when regenerating an id that collided with an existing one
pub const ID_RETRY_ATTEMPTS: usize = 5;

/// Default remote upload timeout in seconds
pub const DEFAULT_UPLOAD_TIMEOUT_SECS: u64 = 30;

/// Delay before surfacing the gallery after an upload batch completes (ms)
pub const UPLOAD_REDIRECT_DELAY_MS: u64 = 1500;

/// Folder remote uploads are grouped under on the media host
pub const DEFAULT_UPLOAD_FOLDER: &str = "moments-events";
