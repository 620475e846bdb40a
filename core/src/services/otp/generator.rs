//! OTP code generation

use lu_shared::types::OtpLength;
use rand::Rng;

use super::traits::CodeGenerator;

/// Generate a random code of the requested width
///
/// The value is drawn uniformly from the full-width range (`1000..=9999` or
/// `100000..=999999`), so the result never has a leading zero and needs no
/// padding. Successive calls are independent and may repeat.
pub fn generate(length: OtpLength) -> String {
    let mut rng = rand::thread_rng();
    let code: u32 = rng.gen_range(length.min_value()..=length.max_value());
    code.to_string()
}

/// Default generator backed by the thread-local RNG
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomCodeGenerator;

impl CodeGenerator for RandomCodeGenerator {
    fn generate(&self, length: OtpLength) -> String {
        generate(length)
    }
}
