use crate::collections::StringList;

/// шаг разбиения: слово из словаря или неизвестный кластер
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step
{
    Word,
    Unknown,
}

/// лучший путь до позиции: (неизвестных кластеров, слов), откуда пришли, каким шагом
#[derive(Debug, Clone, Copy)]
struct Path
{
    cost: (usize, usize),
    from: usize,
    step: Step,
}

/// разбиение по словарю: кратчайший путь по границам кластеров графем,
/// минимизирующий сначала количество неизвестных кластеров, затем количество слов
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionarySegmenter
{
    words: StringList,
}

impl DictionarySegmenter
{
    pub fn new(words: StringList) -> Self
    {
        Self { words }
    }

    /// text - участок текста, clusters - байтовые позиции границ кластеров, включая 0 и text.len().
    /// возвращает номера границ кластеров, на которых начинаются слова (кроме 0 и последней)
    pub fn segment(&self, text: &str, clusters: &[usize]) -> Vec<usize>
    {
        let count = clusters.len();

        if count < 3 {
            return vec![];
        }

        let mut paths: Vec<Option<Path>> = vec![None; count];
        paths[0] = Some(Path {
            cost: (0, 0),
            from: 0,
            step: Step::Word,
        });

        for start in 0 .. count - 1 {
            let (unknown, words) = match paths[start] {
                Some(path) => path.cost,
                None => continue,
            };

            relax(&mut paths, start, start + 1, (unknown + 1, words + 1), Step::Unknown);

            for end in start + 1 .. count {
                let piece = match text.get(clusters[start] .. clusters[end]) {
                    Some(piece) => piece,
                    None => break,
                };

                match self.words.binary_search(piece) {
                    Ok(_) => relax(&mut paths, start, end, (unknown, words + 1), Step::Word),
                    Err(index) => {
                        // в словаре нет слов, начинающихся с piece
                        if !self.words.get(index).map_or(false, |word| word.starts_with(piece)) {
                            break;
                        }
                    }
                }
            }
        }

        let mut breaks = vec![];
        let mut position = count - 1;

        while position > 0 {
            let path = match paths[position] {
                Some(path) => path,
                None => break,
            };

            // соседние неизвестные кластеры образуют один сегмент
            let merged = path.step == Step::Unknown
                && paths[path.from].map_or(false, |previous| previous.step == Step::Unknown && path.from > 0);

            if path.from > 0 && !merged {
                breaks.push(path.from);
            }

            position = path.from;
        }

        breaks.reverse();
        breaks
    }
}

#[inline]
fn relax(paths: &mut [Option<Path>], from: usize, to: usize, cost: (usize, usize), step: Step)
{
    let better = match paths[to] {
        Some(path) => cost < path.cost,
        None => true,
    };

    if better {
        paths[to] = Some(Path { cost, from, step });
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    fn clusters(text: &str) -> Vec<usize>
    {
        text.char_indices().map(|(i, _)| i).chain(std::iter::once(text.len())).collect()
    }

    #[test]
    fn words()
    {
        let segmenter = DictionarySegmenter::new(StringList::from_strings(["ab", "abc", "cd", "d", "xyz"]));

        let text = "abcd";
        assert_eq!(segmenter.segment(text, &clusters(text)), vec![2]);

        let text = "abcdab";
        assert_eq!(segmenter.segment(text, &clusters(text)), vec![2, 4]);
    }

    #[test]
    fn unknown()
    {
        let segmenter = DictionarySegmenter::new(StringList::from_strings(["ab", "cd"]));

        // неизвестный участок "qq" - один сегмент
        let text = "abqqcd";
        assert_eq!(segmenter.segment(text, &clusters(text)), vec![2, 4]);

        let text = "qqq";
        assert_eq!(segmenter.segment(text, &clusters(text)), Vec::<usize>::new());
    }
}
