use std::collections::HashMap;

use crate::ucd::UcdError;

const CODEPOINTS: u32 = 0x110000;
/// размер блока данных - 64 значения
const BMP_SHIFT: u32 = 6;
const BLOCK_LEN: usize = 1 << BMP_SHIFT;
/// индекс первого уровня для дополнительных плоскостей - по 4096 кодпоинтов
const SUPP_SHIFT: u32 = 12;
/// записей второго уровня на одну запись первого
const INDEX2_LEN: usize = 1 << (SUPP_SHIFT - BMP_SHIFT);

/// таблицы трие в том виде, в котором их читает CodePointTrie
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedTrie
{
    pub index: Vec<u16>,
    pub data: Vec<u32>,
    pub high_start: u32,
    pub high_value: u32,
    pub error_value: u32,
}

/// строим трие по значениям всех кодпоинтов
///
/// значения от последнего отличающегося блока 4096 кодпоинтов до U+10FFFF сворачиваются в high_value,
/// одинаковые блоки данных и одинаковые блоки второго уровня индекса хранятся один раз
pub fn encode_trie(values: &[u32], error_value: u32) -> Result<EncodedTrie, UcdError>
{
    if values.len() != CODEPOINTS as usize {
        return Err(UcdError::Inconsistent(format!(
            "ожидалось {} значений, получено {}",
            CODEPOINTS,
            values.len()
        )));
    }

    let high_value = values[CODEPOINTS as usize - 1];

    let mut last = CODEPOINTS - 1;
    while last >= 0x10000 && values[last as usize] == high_value {
        last -= 1;
    }
    let high_start = (((last >> SUPP_SHIFT) + 1) << SUPP_SHIFT).max(0x10000);

    let mut builder = Builder::default();

    let mut index: Vec<u16> = (0 .. 0x10000)
        .step_by(BLOCK_LEN)
        .map(|start| builder.block(values, start))
        .collect::<Result<_, _>>()?;

    // первый уровень: по записи на каждые 4096 кодпоинтов от U+10000 до high_start
    let index1_len = ((high_start - 0x10000) >> SUPP_SHIFT) as usize;
    let index1_start = index.len();
    index.resize(index1_start + index1_len, 0);

    let mut index2_blocks: HashMap<Vec<u16>, u16> = HashMap::new();

    for i1 in 0 .. index1_len {
        let base = 0x10000 + (i1 << SUPP_SHIFT);

        let blocks: Vec<u16> = (0 .. INDEX2_LEN)
            .map(|j| builder.block(values, base + j * BLOCK_LEN))
            .collect::<Result<_, _>>()?;

        let position = match index2_blocks.get(&blocks) {
            Some(&position) => position,
            None => {
                let position = to_u16(index.len())?;
                index.extend_from_slice(&blocks);
                index2_blocks.insert(blocks, position);
                position
            }
        };

        index[index1_start + i1] = position;
    }

    to_u16(index.len())?;

    Ok(EncodedTrie {
        index,
        data: builder.data,
        high_start,
        high_value,
        error_value,
    })
}

/// уникальные блоки данных
#[derive(Default)]
struct Builder
{
    data: Vec<u32>,
    blocks: HashMap<Vec<u32>, u16>,
}

impl Builder
{
    fn block(&mut self, values: &[u32], start: usize) -> Result<u16, UcdError>
    {
        let block = &values[start .. start + BLOCK_LEN];

        if let Some(&number) = self.blocks.get(block) {
            return Ok(number);
        }

        let number = to_u16(self.data.len() >> BMP_SHIFT)?;

        self.data.extend_from_slice(block);
        self.blocks.insert(block.to_vec(), number);

        Ok(number)
    }
}

fn to_u16(value: usize) -> Result<u16, UcdError>
{
    u16::try_from(value).map_err(|_| UcdError::Inconsistent(format!("индекс трие не помещается в u16: {}", value)))
}
