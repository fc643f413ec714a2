/// Base URL for the Yandex Connect (PDD) admin API
pub const DEFAULT_BASE_URL: &str = "https://pddimp.yandex.ru";
/// Name of the authentication header expected by the PDD API
pub const PDD_TOKEN_HEADER: &str = "PddToken";
/// Default number of items requested per page on list endpoints
pub const DEFAULT_PAGE_SIZE: u32 = 20;
/// Hard cap on pages fetched by a single listing call
///
/// The API reports `found`/`total` per page; if those never converge the
/// pagination loop stops here and reports a protocol error instead of
/// spinning forever.
pub const MAX_PAGES: u32 = 1000;
/// Default timeout in seconds for REST API requests
pub const DEFAULT_REQUEST_TIMEOUT: u64 = 30;
/// User agent string used in HTTP requests to identify this client to the PDD API
pub const USER_AGENT: &str = "Rust-PDD-Client/0.2.0";

/// Default first name applied when editing a mailbox with autofill enabled
pub const DEFAULT_FIRST_NAME: &str = "Firstname";
/// Default last name applied when editing a mailbox with autofill enabled
pub const DEFAULT_LAST_NAME: &str = "Lastname";
/// Default mailbox status applied when editing a mailbox with autofill enabled
pub const DEFAULT_ENABLED: &str = "yes";
/// Default date of birth applied when editing a mailbox with autofill enabled
pub const DEFAULT_BIRTH_DATE: &str = "1980-08-08";
/// Default gender code applied when editing a mailbox with autofill enabled (1 = male)
pub const DEFAULT_SEX: &str = "1";
/// Default secret question applied when editing a mailbox with autofill enabled
pub const DEFAULT_HINT_QUESTION: &str = "Hiroşima ve Nagazaki den sorumlu unsurların toplamı";
/// Prefix for generated secret answers
pub const HINT_ANSWER_PREFIX: &str = "3_";

/// Lowercase alphabet for generated passwords, ambiguous `i`, `l`, `o` removed
pub const PASSWORD_SET_LOWER: &str = "abcdefghjkmnpqrstuvwxyz";
/// Uppercase alphabet for generated passwords, ambiguous `I`, `L`, `O` removed
pub const PASSWORD_SET_UPPER: &str = "ABCDEFGHJKMNPQRSTUVWXYZ";
/// Digit alphabet for generated passwords, ambiguous `0` and `1` removed
pub const PASSWORD_SET_DIGITS: &str = "23456789";
/// Symbol alphabet for generated passwords
pub const PASSWORD_SET_SYMBOLS: &str = "!@#$%&*?";
/// Default length of generated passwords
pub const DEFAULT_PASSWORD_LENGTH: usize = 9;
/// Default character-set selector for generated passwords (lower, upper, digits, symbols)
pub const DEFAULT_PASSWORD_SETS: &str = "luds";
