pub mod digits;
pub mod phone;

pub use digits::{bengali_digit_to_ascii, convert_digits, BENGALI_DIGITS};
pub use phone::{normalize_phone, PhoneNumber, COUNTRY_CODE, LOCAL_NUMBER_LEN, LOCAL_PREFIX};
