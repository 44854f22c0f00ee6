use libc::{c_int, size_t};
use std::convert::TryFrom;

mod encoder;

#[allow(clippy::useless_conversion)]
fn size_t_to_usize(n: size_t) -> Option<usize> {
    usize::try_from(n).ok()
}

fn status<E>(result: Result<(), E>) -> c_int {
    match result {
        Ok(()) => 0,
        Err(_) => -1,
    }
}
