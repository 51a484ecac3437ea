use crate::normalizer::codepoint::Codepoint;

// в блоке чамо (U+1100..U+11FF) могут быть скомбинированы кодпоинты:
//  - U+1100..=U+1112 (L, ведущие согласные)
//  - U+1161..=U+1175 (V, гласные)
//  - U+11A8..=U+11C2 (T, завершающие согласные)

/// начало блока ведущих согласных чамо
const HANGUL_L_BASE: u32 = 0x1100;
/// количество ведущих согласных
const HANGUL_L_COUNT: u32 = 19;
/// начало блока гласных чамо
const HANGUL_V_BASE: u32 = 0x1161;
/// количество гласных
const HANGUL_V_COUNT: u32 = 21;
/// начало блока завершающих согласных
const HANGUL_T_BASE: u32 = 0x11A8;
/// количество завершающих согласных
const HANGUL_T_COUNT: u32 = 27;
/// количество кодпоинтов на блок LV
const HANGUL_T_BLOCK_SIZE: u32 = HANGUL_T_COUNT + 1;
/// начало блока слогов хангыль
const HANGUL_S_BASE: u32 = 0xAC00;
/// количество слогов хангыль в Unicode
const HANGUL_S_COUNT: u32 = 11172;
/// количество гласных * количество завершающих согласных
const HANGUL_N_COUNT: u32 = 588;

/// кодпоинт хангыль, который может быть скомбинирован с идущим перед ним кодпоинтом
#[derive(Debug, PartialEq)]
enum HangulVT
{
    /// гласная (V - отступ от начала блока гласных)
    Vowel(u32),
    /// завершающая согласная (T - отступ от начала блока завершающих согласных)
    TrailingConsonant(u32),
}

/// слог хангыль
#[inline(always)]
pub fn is_syllable(code: u32) -> bool
{
    code.wrapping_sub(HANGUL_S_BASE) < HANGUL_S_COUNT
}

/// гласная или завершающая согласная чамо
#[inline(always)]
pub fn is_vt_jamo(code: u32) -> bool
{
    get_vt(code).is_some()
}

/// алгоритмическая декомпозиция слога: L V [T]
#[inline]
pub fn decompose_syllable(code: u32, buffer: &mut Vec<Codepoint>)
{
    let s = code - HANGUL_S_BASE;
    let t = s % HANGUL_T_BLOCK_SIZE;

    buffer.push(Codepoint::from_code(HANGUL_L_BASE + s / HANGUL_N_COUNT));
    buffer.push(Codepoint::from_code(
        HANGUL_V_BASE + (s % HANGUL_N_COUNT) / HANGUL_T_BLOCK_SIZE,
    ));

    if t != 0 {
        buffer.push(Codepoint::from_code(HANGUL_T_BASE + t - 1));
    }
}

/// скомбинировать чамо хангыль (V / T) с предыдущим кодпоинтом: L + V -> LV, LV + T -> LVT
#[inline]
pub fn compose(code: u32, jamo: u32) -> Option<u32>
{
    match get_vt(jamo)? {
        HangulVT::Vowel(v) => {
            let l = code.wrapping_sub(HANGUL_L_BASE);

            match l < HANGUL_L_COUNT {
                true => Some(HANGUL_S_BASE + l * HANGUL_N_COUNT + v * HANGUL_T_BLOCK_SIZE),
                false => None,
            }
        }
        HangulVT::TrailingConsonant(t) => {
            let lv = code.wrapping_sub(HANGUL_S_BASE);

            match lv < HANGUL_S_COUNT && lv % HANGUL_T_BLOCK_SIZE == 0 {
                true => Some(code + t + 1),
                false => None,
            }
        }
    }
}

/// гласная или завершающая согласная чамо и её отступ
#[inline(always)]
fn get_vt(code: u32) -> Option<HangulVT>
{
    let v = code.wrapping_sub(HANGUL_V_BASE);

    if v < HANGUL_V_COUNT {
        return Some(HangulVT::Vowel(v));
    }

    let t = code.wrapping_sub(HANGUL_T_BASE);

    match t < HANGUL_T_COUNT {
        true => Some(HangulVT::TrailingConsonant(t)),
        false => None,
    }
}
