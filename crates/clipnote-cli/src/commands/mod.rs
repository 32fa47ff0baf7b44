pub mod capture;
pub mod chapters;
pub mod clip;
pub mod completion;
pub mod config;
pub mod render;

use clipnote_core::chapters::MalformedPolicy;

pub(crate) fn malformed_policy(drop_malformed: bool) -> MalformedPolicy {
    if drop_malformed {
        MalformedPolicy::Drop
    } else {
        MalformedPolicy::ZeroOffset
    }
}
