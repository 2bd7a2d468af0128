/// Registri YMM (AVX)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum YMMRegister {
    Ymm0,
    Ymm1,
    Ymm2,
    Ymm3,
    Ymm4,
    Ymm5,
    Ymm6,
    Ymm7,
    Ymm8,
    Ymm9,
    Ymm10,
    Ymm11,
    Ymm12,
    Ymm13,
    Ymm14,
    Ymm15,
}
