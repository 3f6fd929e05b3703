pub const PROCESSED_PAYMENTS_SET_KEY: &str = "processed_payments";
pub const PAYMENT_SUMMARY_KEY_PREFIX: &str = "payment_summary";
