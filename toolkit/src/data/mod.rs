//! запечённые таблицы (Unicode 14.0). файлы в data/ - литералы структур, подключаемые через include!

/// данные CodePointTrie: индекс блоков, блоки по 64 значения, значение верхнего диапазона
pub struct TrieData<'a, V>
{
    pub index: &'a [u16],
    pub data: &'a [V],
    pub high_start: u32,
    pub high_value: V,
    pub error_value: V,
}

/// инверсионный список [начало, конец + 1, ...]
pub struct InversionListData<'a>
{
    pub inv_list: &'a [u32],
}

/// инверсионный список + отсортированные (по байтам) строки
pub struct StringSetData<'a>
{
    pub inv_list: &'a [u32],
    pub strings: &'a str,
    pub ends: &'a [u32],
}

/// наборы символов для локалей, локали отсортированы
pub struct ExemplarsData<'a>
{
    pub locales: &'a [&'a str],
    pub sets: &'a [StringSetData<'a>],
}

/// имена значений свойства: отсортированные имена, значения для них и индексы
/// короткого / длинного имени для каждого значения (0xFFFF - нет имени)
pub struct NamesData<'a>
{
    pub names: &'a str,
    pub ends: &'a [u32],
    pub values: &'a [u32],
    pub short: &'a [u16],
    pub long: &'a [u16],
}

/// Script + Script_Extensions
pub struct ScriptExtensionsData<'a>
{
    pub trie: TrieData<'a, u16>,
    pub ext_index: &'a [u16],
    pub ext_data: &'a [u16],
}

/// декомпозиция: индекс блоков по 128 кодпоинтов, значения, расширения
pub struct DecompositionData<'a>
{
    pub index: &'a [u16],
    pub data: &'a [u32],
    pub expansions: &'a [u32],
}

/// пары композиции
pub struct CompositionData<'a>
{
    pub compositions: &'a [u64],
}

/// словарь: отсортированные слова
pub struct DictionaryData<'a>
{
    pub words: &'a str,
    pub ends: &'a [u32],
}

macro_rules! baked {
    ($($fn:ident: $ty:ty = $path:literal;)*) => {
        $(
            pub fn $fn() -> $ty
            {
                include!($path)
            }
        )*
    };
}

pub mod maps
{
    use super::TrieData;

    baked! {
        gc: TrieData<'static, u8> = "./../../../data/props/maps/gc.txt";
        bc: TrieData<'static, u8> = "./../../../data/props/maps/bc.txt";
        ea: TrieData<'static, u8> = "./../../../data/props/maps/ea.txt";
        hst: TrieData<'static, u8> = "./../../../data/props/maps/hst.txt";
        insc: TrieData<'static, u8> = "./../../../data/props/maps/insc.txt";
        lb: TrieData<'static, u8> = "./../../../data/props/maps/lb.txt";
        gcb: TrieData<'static, u8> = "./../../../data/props/maps/gcb.txt";
        wb: TrieData<'static, u8> = "./../../../data/props/maps/wb.txt";
        sb: TrieData<'static, u8> = "./../../../data/props/maps/sb.txt";
        jt: TrieData<'static, u8> = "./../../../data/props/maps/jt.txt";
        ccc: TrieData<'static, u8> = "./../../../data/props/maps/ccc.txt";
        sc: TrieData<'static, u16> = "./../../../data/props/maps/sc.txt";
    }
}

pub mod sets
{
    use super::InversionListData;

    baked! {
        ahex: InversionListData<'static> = "./../../../data/props/sets/ahex.txt";
        alnum: InversionListData<'static> = "./../../../data/props/sets/alnum.txt";
        alpha: InversionListData<'static> = "./../../../data/props/sets/alpha.txt";
        bidi_c: InversionListData<'static> = "./../../../data/props/sets/bidi_c.txt";
        bidi_m: InversionListData<'static> = "./../../../data/props/sets/bidi_m.txt";
        blank: InversionListData<'static> = "./../../../data/props/sets/blank.txt";
        cased: InversionListData<'static> = "./../../../data/props/sets/cased.txt";
        ci: InversionListData<'static> = "./../../../data/props/sets/ci.txt";
        comp_ex: InversionListData<'static> = "./../../../data/props/sets/comp_ex.txt";
        cwcf: InversionListData<'static> = "./../../../data/props/sets/cwcf.txt";
        cwcm: InversionListData<'static> = "./../../../data/props/sets/cwcm.txt";
        cwkcf: InversionListData<'static> = "./../../../data/props/sets/cwkcf.txt";
        cwl: InversionListData<'static> = "./../../../data/props/sets/cwl.txt";
        cwt: InversionListData<'static> = "./../../../data/props/sets/cwt.txt";
        cwu: InversionListData<'static> = "./../../../data/props/sets/cwu.txt";
        dash: InversionListData<'static> = "./../../../data/props/sets/dash.txt";
        dep: InversionListData<'static> = "./../../../data/props/sets/dep.txt";
        di: InversionListData<'static> = "./../../../data/props/sets/di.txt";
        dia: InversionListData<'static> = "./../../../data/props/sets/dia.txt";
        ebase: InversionListData<'static> = "./../../../data/props/sets/ebase.txt";
        ecomp: InversionListData<'static> = "./../../../data/props/sets/ecomp.txt";
        emod: InversionListData<'static> = "./../../../data/props/sets/emod.txt";
        emoji: InversionListData<'static> = "./../../../data/props/sets/emoji.txt";
        epres: InversionListData<'static> = "./../../../data/props/sets/epres.txt";
        ext: InversionListData<'static> = "./../../../data/props/sets/ext.txt";
        extpict: InversionListData<'static> = "./../../../data/props/sets/extpict.txt";
        gr_base: InversionListData<'static> = "./../../../data/props/sets/gr_base.txt";
        gr_ext: InversionListData<'static> = "./../../../data/props/sets/gr_ext.txt";
        gr_link: InversionListData<'static> = "./../../../data/props/sets/gr_link.txt";
        graph: InversionListData<'static> = "./../../../data/props/sets/graph.txt";
        hex: InversionListData<'static> = "./../../../data/props/sets/hex.txt";
        hyphen: InversionListData<'static> = "./../../../data/props/sets/hyphen.txt";
        idc: InversionListData<'static> = "./../../../data/props/sets/idc.txt";
        ideo: InversionListData<'static> = "./../../../data/props/sets/ideo.txt";
        ids: InversionListData<'static> = "./../../../data/props/sets/ids.txt";
        idsb: InversionListData<'static> = "./../../../data/props/sets/idsb.txt";
        idst: InversionListData<'static> = "./../../../data/props/sets/idst.txt";
        join_c: InversionListData<'static> = "./../../../data/props/sets/join_c.txt";
        loe: InversionListData<'static> = "./../../../data/props/sets/loe.txt";
        lower: InversionListData<'static> = "./../../../data/props/sets/lower.txt";
        math: InversionListData<'static> = "./../../../data/props/sets/math.txt";
        nchar: InversionListData<'static> = "./../../../data/props/sets/nchar.txt";
        nfc_inert: InversionListData<'static> = "./../../../data/props/sets/nfc_inert.txt";
        nfd_inert: InversionListData<'static> = "./../../../data/props/sets/nfd_inert.txt";
        nfkc_inert: InversionListData<'static> = "./../../../data/props/sets/nfkc_inert.txt";
        nfkd_inert: InversionListData<'static> = "./../../../data/props/sets/nfkd_inert.txt";
        pat_syn: InversionListData<'static> = "./../../../data/props/sets/pat_syn.txt";
        pat_ws: InversionListData<'static> = "./../../../data/props/sets/pat_ws.txt";
        pcm: InversionListData<'static> = "./../../../data/props/sets/pcm.txt";
        print: InversionListData<'static> = "./../../../data/props/sets/print.txt";
        qmark: InversionListData<'static> = "./../../../data/props/sets/qmark.txt";
        radical: InversionListData<'static> = "./../../../data/props/sets/radical.txt";
        ri: InversionListData<'static> = "./../../../data/props/sets/ri.txt";
        sd: InversionListData<'static> = "./../../../data/props/sets/sd.txt";
        segstart: InversionListData<'static> = "./../../../data/props/sets/segstart.txt";
        sensitive: InversionListData<'static> = "./../../../data/props/sets/sensitive.txt";
        sterm: InversionListData<'static> = "./../../../data/props/sets/sterm.txt";
        term: InversionListData<'static> = "./../../../data/props/sets/term.txt";
        uideo: InversionListData<'static> = "./../../../data/props/sets/uideo.txt";
        upper: InversionListData<'static> = "./../../../data/props/sets/upper.txt";
        vs: InversionListData<'static> = "./../../../data/props/sets/vs.txt";
        wspace: InversionListData<'static> = "./../../../data/props/sets/wspace.txt";
        xdigit: InversionListData<'static> = "./../../../data/props/sets/xdigit.txt";
        xidc: InversionListData<'static> = "./../../../data/props/sets/xidc.txt";
        xids: InversionListData<'static> = "./../../../data/props/sets/xids.txt";
    }
}

pub mod unicodesets
{
    use super::{ExemplarsData, StringSetData};

    baked! {
        basic_emoji: StringSetData<'static> = "./../../../data/props/unicodesets/basic_emoji.txt";
        exemplars_main: ExemplarsData<'static> = "./../../../data/props/exemplars/main.txt";
        exemplars_auxiliary: ExemplarsData<'static> = "./../../../data/props/exemplars/auxiliary.txt";
        exemplars_index: ExemplarsData<'static> = "./../../../data/props/exemplars/index.txt";
        exemplars_numbers: ExemplarsData<'static> = "./../../../data/props/exemplars/numbers.txt";
        exemplars_punctuation: ExemplarsData<'static> = "./../../../data/props/exemplars/punctuation.txt";
    }
}

pub mod names
{
    use super::NamesData;

    baked! {
        gc: NamesData<'static> = "./../../../data/props/names/gc.txt";
        gc_mask: NamesData<'static> = "./../../../data/props/names/gcm.txt";
        bc: NamesData<'static> = "./../../../data/props/names/bc.txt";
        ea: NamesData<'static> = "./../../../data/props/names/ea.txt";
        hst: NamesData<'static> = "./../../../data/props/names/hst.txt";
        insc: NamesData<'static> = "./../../../data/props/names/insc.txt";
        lb: NamesData<'static> = "./../../../data/props/names/lb.txt";
        gcb: NamesData<'static> = "./../../../data/props/names/gcb.txt";
        wb: NamesData<'static> = "./../../../data/props/names/wb.txt";
        sb: NamesData<'static> = "./../../../data/props/names/sb.txt";
        jt: NamesData<'static> = "./../../../data/props/names/jt.txt";
        ccc: NamesData<'static> = "./../../../data/props/names/ccc.txt";
        sc: NamesData<'static> = "./../../../data/props/names/sc.txt";
    }
}

pub mod script
{
    use super::{ScriptExtensionsData, TrieData};

    baked! {
        scx: ScriptExtensionsData<'static> = "./../../../data/props/scx.txt";
    }
}

pub mod normalizer
{
    use super::{CompositionData, DecompositionData};

    baked! {
        nfd: DecompositionData<'static> = "./../../../data/normalizer/nfd.txt";
        nfkd: DecompositionData<'static> = "./../../../data/normalizer/nfkd.txt";
        compositions: CompositionData<'static> = "./../../../data/normalizer/compositions.txt";
    }
}

pub mod segmenter
{
    use super::DictionaryData;

    baked! {
        thai: DictionaryData<'static> = "./../../../data/segmenter/dictionaries/thai.txt";
        cj: DictionaryData<'static> = "./../../../data/segmenter/dictionaries/cj.txt";
    }
}
