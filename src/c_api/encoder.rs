use super::{size_t_to_usize, status};
use crate::{
    codes::nr5g::BaseGraph,
    encoder::{Encoder, EncoderImplementation},
};
use libc::{c_int, size_t};
use std::ffi::c_void;

fn implementation_from_c(implementation: c_int) -> Option<EncoderImplementation> {
    Some(match implementation {
        -1 => EncoderImplementation::widest_available(),
        0 => EncoderImplementation::Scalar,
        1 => EncoderImplementation::Avx2,
        2 => EncoderImplementation::Packed,
        _ => return None,
    })
}

fn base_graph_from_c(base_graph: c_int) -> Option<BaseGraph> {
    match base_graph {
        1 => Some(BaseGraph::BG1),
        2 => Some(BaseGraph::BG2),
        _ => None,
    }
}

unsafe fn slices<'a>(
    output: *mut u8,
    output_len: size_t,
    input: *const u8,
    input_len: size_t,
) -> Option<(&'a mut [u8], &'a [u8])> {
    if output.is_null() || input.is_null() {
        return None;
    }
    let output = std::slice::from_raw_parts_mut(output, size_t_to_usize(output_len)?);
    let input = std::slice::from_raw_parts(input, size_t_to_usize(input_len)?);
    Some((output, input))
}

/// Creates an encoder.
///
/// `implementation` is -1 for the widest implementation supported by the
/// CPU, 0 for scalar, 1 for AVX2 and 2 for packed. `base_graph` is 1 or 2.
/// Returns null on error.
#[no_mangle]
unsafe extern "C" fn nr_ldpc_encoder_init(
    implementation: c_int,
    base_graph: c_int,
    lifting_size: size_t,
) -> *mut c_void {
    let (Some(implementation), Some(base_graph), Some(lifting_size)) = (
        implementation_from_c(implementation),
        base_graph_from_c(base_graph),
        size_t_to_usize(lifting_size),
    ) else {
        return std::ptr::null_mut();
    };
    match Encoder::new(base_graph, lifting_size, implementation) {
        Ok(encoder) => Box::into_raw(Box::new(encoder)) as *mut c_void,
        Err(_) => std::ptr::null_mut(),
    }
}

/// Releases an encoder created by `nr_ldpc_encoder_init`.
#[no_mangle]
unsafe extern "C" fn nr_ldpc_encoder_free(encoder: *mut c_void) {
    if !encoder.is_null() {
        Box::from_raw(encoder as *mut Encoder).release();
    }
}

/// Encodes a message into a full codeword. Returns 0 on success and -1 on
/// error.
#[no_mangle]
unsafe extern "C" fn nr_ldpc_encoder_encode(
    encoder: *mut c_void,
    output: *mut u8,
    output_len: size_t,
    input: *const u8,
    input_len: size_t,
) -> c_int {
    let Some(encoder) = (encoder as *mut Encoder).as_mut() else {
        return -1;
    };
    let Some((output, input)) = slices(output, output_len, input, input_len) else {
        return -1;
    };
    status(encoder.encode_into(input, output))
}

/// Encodes a message into a rate-matched codeword with `output_len` bits.
/// Returns 0 on success and -1 on error.
#[no_mangle]
unsafe extern "C" fn nr_ldpc_encoder_encode_rm(
    encoder: *mut c_void,
    output: *mut u8,
    output_len: size_t,
    input: *const u8,
    input_len: size_t,
) -> c_int {
    let Some(encoder) = (encoder as *mut Encoder).as_mut() else {
        return -1;
    };
    let Some((output, input)) = slices(output, output_len, input, input_len) else {
        return -1;
    };
    status(encoder.encode_rm_into(input, output))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn lifecycle() {
        unsafe {
            let encoder = nr_ldpc_encoder_init(0, 2, 2);
            assert!(!encoder.is_null());
            let input = [0u8; 20];
            let mut output = [1u8; 104];
            assert_eq!(
                nr_ldpc_encoder_encode(encoder, output.as_mut_ptr(), 104, input.as_ptr(), 20),
                0
            );
            assert!(output.iter().all(|&x| x == 0));
            let mut rm = [1u8; 50];
            assert_eq!(
                nr_ldpc_encoder_encode_rm(encoder, rm.as_mut_ptr(), 50, input.as_ptr(), 20),
                0
            );
            assert!(rm.iter().all(|&x| x == 0));
            assert_eq!(
                nr_ldpc_encoder_encode(encoder, output.as_mut_ptr(), 104, input.as_ptr(), 19),
                -1
            );
            assert_eq!(
                nr_ldpc_encoder_encode_rm(encoder, rm.as_mut_ptr(), 0, input.as_ptr(), 20),
                -1
            );
            nr_ldpc_encoder_free(encoder);
        }
    }

    #[test]
    fn invalid_arguments() {
        unsafe {
            assert!(nr_ldpc_encoder_init(0, 2, 17).is_null());
            assert!(nr_ldpc_encoder_init(0, 3, 2).is_null());
            assert!(nr_ldpc_encoder_init(5, 1, 2).is_null());
            let input = [0u8; 20];
            let mut output = [0u8; 104];
            assert_eq!(
                nr_ldpc_encoder_encode(
                    std::ptr::null_mut(),
                    output.as_mut_ptr(),
                    104,
                    input.as_ptr(),
                    20
                ),
                -1
            );
            nr_ldpc_encoder_free(std::ptr::null_mut());
        }
    }

    #[test]
    fn widest_implementation() {
        unsafe {
            let encoder = nr_ldpc_encoder_init(-1, 1, 384);
            assert!(!encoder.is_null());
            let e = &*(encoder as *const Encoder);
            assert_eq!(e.implementation(), EncoderImplementation::widest_available());
            nr_ldpc_encoder_free(encoder);
        }
    }
}
