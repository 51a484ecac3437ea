use std::collections::{BTreeMap, HashMap, HashSet};

use log::info;

use crate::encode::{encode_compositions, encode_decompositions};
use crate::output::{format, Output};
use crate::ucd::{UcdError, UcdFile, UnicodeData};

use super::CODEPOINTS;

const S_BASE: u32 = 0xAC00;
const L_BASE: u32 = 0x1100;
const V_BASE: u32 = 0x1161;
const T_BASE: u32 = 0x11A7;
const V_COUNT: u32 = 21;
const T_COUNT: u32 = 28;
const S_COUNT: u32 = 11172;

/// значение NFC_QC / NFKC_QC
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickCheck
{
    Yes,
    No,
    Maybe,
}

/// нормализация по данным UCD: полные декомпозиции, пары композиции, быстрые проверки
#[derive(Debug, Clone)]
pub struct Normalization
{
    pub ccc: Vec<u8>,
    /// полные канонические декомпозиции, без хангыля
    pub canonical: BTreeMap<u32, Vec<u32>>,
    /// полные совместимые декомпозиции, без хангыля
    pub compatible: BTreeMap<u32, Vec<u32>>,
    /// (первый, второй) -> результат, кроме исключений из композиции
    pub pairs: BTreeMap<(u32, u32), u32>,
    /// канонические декомпозиции первого уровня
    raw: BTreeMap<u32, Vec<u32>>,
    forward: HashMap<u32, HashMap<u32, u32>>,
    backward: HashSet<u32>,
    nfc_qc: Vec<QuickCheck>,
    nfkc_qc: Vec<QuickCheck>,
}

impl Normalization
{
    pub fn new(unicode_data: &UnicodeData, derived: &UcdFile) -> Result<Self, UcdError>
    {
        let mut ccc = vec![0; CODEPOINTS];
        for (&code, codepoint) in unicode_data.codepoints.iter() {
            ccc[code as usize] = codepoint.ccc;
        }

        let mut raw = BTreeMap::new();
        let mut canonical = BTreeMap::new();
        let mut compatible = BTreeMap::new();

        for (&code, codepoint) in unicode_data.codepoints.iter() {
            if codepoint.decomposition.is_empty() {
                continue;
            }

            if let Some(decomposition) = codepoint.canonical_decomposition() {
                raw.insert(code, decomposition.to_vec());
                canonical.insert(code, full_decomposition(unicode_data, &ccc, code, false));
            }

            compatible.insert(code, full_decomposition(unicode_data, &ccc, code, true));
        }

        let mut exclusions = vec![false; CODEPOINTS];
        derived.fill_binary("Full_Composition_Exclusion", &mut exclusions);

        let mut pairs = BTreeMap::new();

        for (&code, decomposition) in raw.iter() {
            if exclusions[code as usize] {
                continue;
            }

            match decomposition.as_slice() {
                &[first, second] => pairs.insert((first, second), code),
                _ => {
                    return Err(UcdError::Inconsistent(format!(
                        "U+{:04X}: декомпозиция из {} кодпоинтов не исключена из композиции",
                        code,
                        decomposition.len()
                    )))
                }
            };
        }

        let mut forward: HashMap<u32, HashMap<u32, u32>> = HashMap::new();
        for (&(first, second), &composed) in pairs.iter() {
            forward.entry(first).or_default().insert(second, composed);
        }
        let backward = pairs.keys().map(|&(_, second)| second).collect();

        Ok(Self {
            nfc_qc: quick_checks(derived, "NFC_QC"),
            nfkc_qc: quick_checks(derived, "NFKC_QC"),
            ccc,
            canonical,
            compatible,
            pairs,
            raw,
            forward,
            backward,
        })
    }

    #[inline]
    pub fn ccc(&self, code: u32) -> u8
    {
        self.ccc.get(code as usize).copied().unwrap_or(0)
    }

    pub fn quick_check(&self, code: u32, compatible: bool) -> QuickCheck
    {
        let values = match compatible {
            true => &self.nfkc_qc,
            false => &self.nfc_qc,
        };

        values.get(code as usize).copied().unwrap_or(QuickCheck::Yes)
    }

    fn decompositions(&self, compatible: bool) -> &BTreeMap<u32, Vec<u32>>
    {
        match compatible {
            true => &self.compatible,
            false => &self.canonical,
        }
    }

    /// композиция пары, в том числе хангыль
    pub fn compose(&self, first: u32, second: u32) -> Option<u32>
    {
        if is_l(first) && is_v(second) {
            return Some(S_BASE + ((first - L_BASE) * V_COUNT + (second - V_BASE)) * T_COUNT);
        }
        if is_lv(first) && is_t(second) {
            return Some(first + second - T_BASE);
        }

        self.forward.get(&first)?.get(&second).copied()
    }

    fn combines_forward(&self, code: u32) -> bool
    {
        self.forward.contains_key(&code) || is_l(code) || is_lv(code)
    }

    fn combines_backward(&self, code: u32) -> bool
    {
        self.backward.contains(&code) || is_v(code) || is_t(code)
    }

    /// есть ли среди вторых кодпоинтов пар со стартером кодпоинт с CCC строго между low и high
    fn ccc_between(&self, starter: u32, low: u16, high: u16) -> bool
    {
        if high < low + 2 {
            return false;
        }

        match self.forward.get(&starter) {
            Some(seconds) => seconds.keys().any(|&second| {
                let ccc = self.ccc(second) as u16;
                low < ccc && ccc < high
            }),
            None => false,
        }
    }

    /// может ли кодпоинт, следующий за декомпозицией, изменить результат её композиции
    fn no_boundary_after(&self, d: &[u32]) -> bool
    {
        let last = match d.len() {
            0 => return false,
            len => len - 1,
        };

        let ls = match d.iter().rposition(|&c| self.ccc(c) == 0) {
            Some(ls) => ls,
            None => return true,
        };

        // декомпозиция заканчивается стартером: собираем хвост из стартеров
        if ls == last {
            let mut i = last;
            while i > 0 && self.ccc(d[i - 1]) == 0 && !is_jamo(d[i - 1]) {
                i -= 1;
            }

            let starter = d[i + 1 ..]
                .iter()
                .fold(d[i], |starter, &c| self.compose(starter, c).unwrap_or(c));

            return self.combines_forward(starter);
        }

        let mut starter = d[ls];

        if ls == 0 && self.combines_backward(starter) {
            return true;
        }
        if is_l(starter) || (is_v(starter) && ls > 0 && is_l(d[ls - 1])) {
            return false;
        }

        let mut i = ls;
        while i > 0 && self.ccc(d[i - 1]) == 0 && !is_jamo(d[i - 1]) {
            starter = d[i - 1];
            i -= 1;
        }

        if i == ls && !self.forward.contains_key(&starter) {
            return false;
        }

        let mut previous: u16 = 0;

        for (i, &c) in d.iter().enumerate().skip(i + 1) {
            let ccc = self.ccc(c) as u16;

            if i > ls && self.ccc_between(starter, previous, ccc) {
                return true;
            }

            let composed = match (previous < ccc || previous == 0) && self.combines_backward(c) {
                true => self.compose(starter, c),
                false => None,
            };

            match composed {
                Some(composed) => starter = composed,
                None => {
                    previous = ccc;
                    if ccc == 0 {
                        starter = c;
                    }
                }
            }
        }

        self.ccc_between(starter, previous, 256)
    }

    /// NFC_Inert / NFKC_Inert: кодпоинт не взаимодействует с соседями при композиции
    pub fn inert(&self, compatible: bool) -> Vec<bool>
    {
        let decompositions = self.decompositions(compatible);

        (0 .. CODEPOINTS as u32)
            .map(|code| {
                if self.ccc(code) != 0 || self.quick_check(code, compatible) != QuickCheck::Yes {
                    return false;
                }

                if is_hangul(code) {
                    return !is_lv(code);
                }

                match decompositions.get(&code) {
                    Some(d) => !self.no_boundary_after(d),
                    None => !self.no_boundary_after(&[code]),
                }
            })
            .collect()
    }

    /// NFD_Inert / NFKD_Inert: стартер без декомпозиции
    pub fn decomposition_inert(&self, compatible: bool) -> Vec<bool>
    {
        let decompositions = self.decompositions(compatible);

        (0 .. CODEPOINTS as u32)
            .map(|code| self.ccc(code) == 0 && !decompositions.contains_key(&code) && !is_hangul(code))
            .collect()
    }

    /// Segment_Starter: с кодпоинта может начинаться сегмент канонической композиции
    pub fn segment_starters(&self) -> Vec<bool>
    {
        let mut starters: Vec<bool> = (0 .. CODEPOINTS as u32)
            .map(|code| self.ccc(code) == 0 && self.quick_check(code, false) != QuickCheck::Maybe)
            .collect();

        for (&code, d) in self.canonical.iter() {
            if self.quick_check(code, false) != QuickCheck::No {
                continue;
            }

            // синглтон в кодпоинт, который не меняется при NFC
            if let Some(&[single]) = self.raw.get(&code).map(Vec::as_slice) {
                if self.quick_check(single, false) == QuickCheck::Yes {
                    continue;
                }
            }

            for &c in d.iter().skip(1) {
                starters[c as usize] = false;
            }
        }

        starters
    }
}

/// normalizer/nfd.txt, normalizer/nfkd.txt, normalizer/compositions.txt
pub fn generate(normalization: &Normalization, output: &mut Output) -> Result<(), UcdError>
{
    let compositions = encode_compositions(&normalization.pairs, &normalization.ccc)?;

    info!(
        "нормализация: {} канонических, {} совместимых декомпозиций, {} пар",
        normalization.canonical.len(),
        normalization.compatible.len(),
        normalization.pairs.len()
    );

    for (name, compatible) in [("nfd", false), ("nfkd", true)] {
        let tables = encode_decompositions(normalization.decompositions(compatible), &normalization.ccc, &compositions)?;
        output.write(&format!("normalizer/{}.txt", name), &format::decompositions(&tables))?;
    }

    output.write("normalizer/compositions.txt", &format::compositions(&compositions.table))
}

/// рекурсивная декомпозиция с каноническим упорядочиванием
fn full_decomposition(unicode_data: &UnicodeData, ccc: &[u8], code: u32, compatible: bool) -> Vec<u32>
{
    let mut result = vec![];
    decompose(unicode_data, code, compatible, &mut result);

    // устойчивая сортировка нестартеров между стартерами
    let mut start = 0;
    while start < result.len() {
        let end = result[start ..]
            .iter()
            .position(|&c| ccc[c as usize] == 0)
            .map(|p| start + p)
            .unwrap_or(result.len());

        result[start .. end].sort_by_key(|&c| ccc[c as usize]);
        start = end + 1;
    }

    result
}

fn decompose(unicode_data: &UnicodeData, code: u32, compatible: bool, result: &mut Vec<u32>)
{
    let decomposition = match unicode_data.codepoints.get(&code) {
        Some(codepoint) if compatible => Some(codepoint.decomposition.as_slice()).filter(|d| !d.is_empty()),
        Some(codepoint) => codepoint.canonical_decomposition(),
        None => None,
    };

    match decomposition {
        Some(decomposition) => {
            for &c in decomposition {
                decompose(unicode_data, c, compatible, result);
            }
        }
        None => result.push(code),
    }
}

fn quick_checks(derived: &UcdFile, property: &str) -> Vec<QuickCheck>
{
    let mut no = vec![false; CODEPOINTS];
    let mut maybe = vec![false; CODEPOINTS];

    derived.fill_where(&[property, "N"], &mut no);
    derived.fill_where(&[property, "M"], &mut maybe);

    no.iter()
        .zip(maybe.iter())
        .map(|(&no, &maybe)| match (no, maybe) {
            (true, _) => QuickCheck::No,
            (false, true) => QuickCheck::Maybe,
            (false, false) => QuickCheck::Yes,
        })
        .collect()
}

fn is_l(code: u32) -> bool
{
    (L_BASE .. L_BASE + 19).contains(&code)
}

fn is_v(code: u32) -> bool
{
    (V_BASE .. V_BASE + V_COUNT).contains(&code)
}

fn is_t(code: u32) -> bool
{
    (T_BASE + 1 .. T_BASE + T_COUNT).contains(&code)
}

fn is_jamo(code: u32) -> bool
{
    is_l(code) || is_v(code) || is_t(code)
}

fn is_hangul(code: u32) -> bool
{
    (S_BASE .. S_BASE + S_COUNT).contains(&code)
}

fn is_lv(code: u32) -> bool
{
    is_hangul(code) && (code - S_BASE) % T_COUNT == 0
}

#[cfg(test)]
mod tests
{
    use super::*;

    const UNICODE_DATA: &str = "\
0041;LATIN CAPITAL LETTER A;Lu;0;L;;;;;N;;;;0061;
00C5;LATIN CAPITAL LETTER A WITH RING ABOVE;Lu;0;L;0041 030A;;;;N;;;;00E5;
0104;LATIN CAPITAL LETTER A WITH OGONEK;Lu;0;L;0041 0328;;;;N;;;;0105;
01FA;LATIN CAPITAL LETTER A WITH RING ABOVE AND ACUTE;Lu;0;L;00C5 0301;;;;N;;;;01FB;
0301;COMBINING ACUTE ACCENT;Mn;230;NSM;;;;;N;;;;;
030A;COMBINING RING ABOVE;Mn;230;NSM;;;;;N;;;;;
0328;COMBINING OGONEK;Mn;202;NSM;;;;;N;;;;;
0CC2;KANNADA VOWEL SIGN UU;Mc;0;L;;;;;N;;;;;
0CC6;KANNADA VOWEL SIGN E;Mn;0;NSM;;;;;N;;;;;
0CCA;KANNADA VOWEL SIGN O;Mc;0;L;0CC6 0CC2;;;;N;;;;;
0CCB;KANNADA VOWEL SIGN OO;Mc;0;L;0CCA 0CD5;;;;N;;;;;
0CD5;KANNADA LENGTH MARK;Mc;0;L;;;;;N;;;;;
0F71;TIBETAN VOWEL SIGN AA;Mn;129;NSM;;;;;N;;;;;
0F72;TIBETAN VOWEL SIGN I;Mn;130;NSM;;;;;N;;;;;
0F73;TIBETAN VOWEL SIGN II;Mn;0;NSM;0F71 0F72;;;;N;;;;;
1100;HANGUL CHOSEONG KIYEOK;Lo;0;L;;;;;N;;;;;
1161;HANGUL JUNGSEONG A;Lo;0;L;;;;;N;;;;;
11A8;HANGUL JONGSEONG KIYEOK;Lo;0;L;;;;;N;;;;;
212B;ANGSTROM SIGN;Lu;0;L;00C5;;;;N;;;;00E5;
FB01;LATIN SMALL LIGATURE FI;Ll;0;L;<compat> 0066 0069;;;;N;;;;;
0066;LATIN SMALL LETTER F;Ll;0;L;;;;;N;;;0046;;0046
0069;LATIN SMALL LETTER I;Ll;0;L;;;;;N;;;0049;;0049
AC00;<Hangul Syllable, First>;Lo;0;L;;;;;N;;;;;
D7A3;<Hangul Syllable, Last>;Lo;0;L;;;;;N;;;;;
";

    const DERIVED: &str = "\
0F73          ; Full_Composition_Exclusion # Mn       TIBETAN VOWEL SIGN II
212B          ; Full_Composition_Exclusion # Lu       ANGSTROM SIGN
0F73          ; NFC_QC; N # Mn       TIBETAN VOWEL SIGN II
212B          ; NFC_QC; N # Lu       ANGSTROM SIGN
0301          ; NFC_QC; M # Mn       COMBINING ACUTE ACCENT
030A          ; NFC_QC; M # Mn       COMBINING RING ABOVE
0328          ; NFC_QC; M # Mn       COMBINING OGONEK
0CC2          ; NFC_QC; M # Mc       KANNADA VOWEL SIGN UU
0CD5          ; NFC_QC; M # Mc       KANNADA LENGTH MARK
1161..1175    ; NFC_QC; M # Lo  [21] HANGUL JUNGSEONG A..HANGUL JUNGSEONG I
11A8..11C2    ; NFC_QC; M # Lo  [27] HANGUL JONGSEONG KIYEOK..HANGUL JONGSEONG HIEUH
0F73          ; NFKC_QC; N # Mn       TIBETAN VOWEL SIGN II
212B          ; NFKC_QC; N # Lu       ANGSTROM SIGN
FB01          ; NFKC_QC; N # Ll       LATIN SMALL LIGATURE FI
0301          ; NFKC_QC; M # Mn       COMBINING ACUTE ACCENT
030A          ; NFKC_QC; M # Mn       COMBINING RING ABOVE
0328          ; NFKC_QC; M # Mn       COMBINING OGONEK
0CC2          ; NFKC_QC; M # Mc       KANNADA VOWEL SIGN UU
0CD5          ; NFKC_QC; M # Mc       KANNADA LENGTH MARK
1161..1175    ; NFKC_QC; M # Lo  [21] HANGUL JUNGSEONG A..HANGUL JUNGSEONG I
11A8..11C2    ; NFKC_QC; M # Lo  [27] HANGUL JONGSEONG KIYEOK..HANGUL JONGSEONG HIEUH
";

    fn normalization() -> Normalization
    {
        let unicode_data = UnicodeData::parse(UNICODE_DATA).unwrap();
        let derived = UcdFile::parse("DerivedNormalizationProps.txt", DERIVED).unwrap();

        Normalization::new(&unicode_data, &derived).unwrap()
    }

    #[test]
    fn decompositions()
    {
        let normalization = normalization();

        assert_eq!(normalization.canonical[&0x1FA], vec![0x41, 0x30A, 0x301]);
        assert_eq!(normalization.canonical[&0x212B], vec![0x41, 0x30A]);
        assert!(!normalization.canonical.contains_key(&0xFB01));
        assert_eq!(normalization.compatible[&0xFB01], vec![0x66, 0x69]);

        assert_eq!(normalization.pairs.len(), 5);
        assert_eq!(normalization.compose(0xCCA, 0xCD5), Some(0xCCB));
        assert_eq!(normalization.compose(0xC5, 0x301), Some(0x1FA));
        assert_eq!(normalization.compose(0x0F71, 0x0F72), None);
        assert_eq!(normalization.compose(0x1100, 0x1161), Some(0xAC00));
        assert_eq!(normalization.compose(0xAC00, 0x11A8), Some(0xAC01));
    }

    #[test]
    fn inert()
    {
        let normalization = normalization();
        let nfc = normalization.inert(false);
        let nfkc = normalization.inert(true);

        // Ą = A + огонэк (CCC 202), дальнейшая композиция невозможна
        assert!(nfc[0x104]);
        // A, Å и Ǻ ещё могут скомбинироваться со следующим кодпоинтом
        assert!(!nfc[0x41] && !nfc[0xC5] && !nfc[0x1FA]);
        assert!(!nfc[0xCC6] && !nfc[0xCCA]);
        assert!(!nfc[0x301] && !nfc[0x212B]);
        assert!(nfc[0xAC01] && !nfc[0xAC00]);
        assert!(nfc[0xFB01] && !nfkc[0xFB01]);
        assert!(nfc[0x378] && nfkc[0x378]);

        let nfd = normalization.decomposition_inert(false);
        assert!(nfd[0x41] && nfd[0xFB01]);
        assert!(!nfd[0xC5] && !nfd[0x301] && !nfd[0xAC00]);
        assert!(!normalization.decomposition_inert(true)[0xFB01]);
    }

    #[test]
    fn segment_starters()
    {
        let starters = normalization().segment_starters();

        assert!(starters[0x41] && starters[0xCCA] && starters[0x212B]);
        assert!(starters[0xF73]);
        assert!(!starters[0x1161] && !starters[0x11A8]);
        assert!(!starters[0x301] && !starters[0xCC2]);
        // нестартер внутри декомпозиции исключённого из композиции кодпоинта
        assert!(!starters[0xF71] && !starters[0xF72]);
    }

    #[test]
    fn not_excluded()
    {
        let unicode_data = UnicodeData::parse(UNICODE_DATA).unwrap();
        let derived = UcdFile::parse("DerivedNormalizationProps.txt", "").unwrap();

        assert!(matches!(
            Normalization::new(&unicode_data, &derived),
            Err(UcdError::Inconsistent(_))
        ));
    }
}
