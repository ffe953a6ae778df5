//! Business result codes.
//!
//! Codes follow the CMMRR scheme: C is the category digit, MM the module,
//! RR the reason within that module. `0` is reserved for success.

pub const CODE_OK: i32 = 0;

pub mod category {
    pub const SUCCESS: i32 = 0;
    pub const BUSINESS_ERROR: i32 = 1;
    pub const UNKNOWN_ERROR: i32 = 9;
}

pub mod module {
    pub const AUTH: i32 = 1;
    pub const USER: i32 = 2;
    pub const COMMON: i32 = 99;
}

/// Build a business code using the CMMRR scheme.
pub const fn make_code(category: i32, module: i32, reason: i32) -> i32 {
    (category * 10000) + (module * 100) + reason
}
