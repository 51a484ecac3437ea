//! разбиение двунаправленной LSTM-моделью: вход - кластеры графем, выход - метки BIES

use serde::{Deserialize, Serialize};

use crate::collections::StringList;
use crate::error::{DataError, DataErrorKind};

/// матрица rows x cols, по строкам
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LstmMatrix
{
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<f32>,
}

impl LstmMatrix
{
    pub fn new(rows: usize, cols: usize, data: Vec<f32>) -> Self
    {
        Self { rows, cols, data }
    }

    pub fn zeros(rows: usize, cols: usize) -> Self
    {
        Self::new(rows, cols, vec![0.0; rows * cols])
    }

    #[inline]
    pub fn row(&self, row: usize) -> &[f32]
    {
        self.data.get(row * self.cols .. (row + 1) * self.cols).unwrap_or(&[])
    }

    /// result += self * vector
    #[inline]
    fn add_product(&self, vector: &[f32], result: &mut [f32])
    {
        for (row, value) in result.iter_mut().enumerate().take(self.rows) {
            *value += dot(self.row(row), vector);
        }
    }

    fn is_consistent(&self) -> bool
    {
        self.data.len() == self.rows * self.cols
    }
}

/// слой LSTM. порядок вентилей в весах: input, forget, cell, output
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LstmLayer
{
    /// 4h x e
    pub input_weights: LstmMatrix,
    /// 4h x h
    pub hidden_weights: LstmMatrix,
    /// 4h
    pub bias: Vec<f32>,
}

impl LstmLayer
{
    fn hunits(&self) -> usize
    {
        self.bias.len() / 4
    }

    /// один шаг: обновляет h и c
    fn step(&self, input: &[f32], hidden: &mut [f32], cell: &mut [f32])
    {
        let units = self.hunits();
        let mut gates = self.bias.clone();

        self.input_weights.add_product(input, &mut gates);
        self.hidden_weights.add_product(hidden, &mut gates);

        for k in 0 .. units {
            let input_gate = sigmoid(gates[k]);
            let forget_gate = sigmoid(gates[units + k]);
            let candidate = gates[2 * units + k].tanh();
            let output_gate = sigmoid(gates[3 * units + k]);

            cell[k] = forget_gate * cell[k] + input_gate * candidate;
            hidden[k] = output_gate * cell[k].tanh();
        }
    }
}

/// метка кластера
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bies
{
    /// начало слова
    Begin,
    Inside,
    End,
    /// слово из одного кластера
    Single,
}

/// LSTM-модель для письменности без пробелов между словами
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LstmModel
{
    pub name: String,
    /// известные кластеры графем, номер - строка в embedding
    pub clusters: StringList,
    /// (clusters.len() + 1) x e, последняя строка - неизвестный кластер
    pub embedding: LstmMatrix,
    pub forward: LstmLayer,
    pub backward: LstmLayer,
    /// 4 x 2h: логиты B, I, E, S по [h прямого слоя; h обратного слоя]
    pub output: LstmMatrix,
    pub output_bias: Vec<f32>,
}

impl LstmModel
{
    /// проверка согласованности размерностей
    pub fn validate(&self) -> Result<(), DataError>
    {
        let dim = self.embedding.cols;
        let units = self.forward.hunits();

        let layer_ok = |layer: &LstmLayer| {
            layer.bias.len() == 4 * units
                && layer.input_weights.rows == 4 * units
                && layer.input_weights.cols == dim
                && layer.hidden_weights.rows == 4 * units
                && layer.hidden_weights.cols == units
                && layer.input_weights.is_consistent()
                && layer.hidden_weights.is_consistent()
        };

        let consistent = units > 0
            && self.embedding.rows == self.clusters.len() + 1
            && self.embedding.is_consistent()
            && layer_ok(&self.forward)
            && layer_ok(&self.backward)
            && self.output.rows == 4
            && self.output.cols == 2 * units
            && self.output.is_consistent()
            && self.output_bias.len() == 4;

        match consistent {
            true => Ok(()),
            false => Err(DataErrorKind::InconsistentData
                .into_error()
                .with_context(format!("LSTM-модель {}", self.name))),
        }
    }

    /// метки BIES для последовательности кластеров
    pub fn classify(&self, clusters: &[&str]) -> Vec<Bies>
    {
        let units = self.forward.hunits();
        let unknown = self.clusters.len();

        let inputs: Vec<&[f32]> = clusters
            .iter()
            .map(|cluster| self.embedding.row(self.clusters.binary_search(cluster).unwrap_or(unknown)))
            .collect();

        let forward = run_layer(&self.forward, &inputs, units, false);
        let backward = run_layer(&self.backward, &inputs, units, true);

        forward
            .iter()
            .zip(backward.iter())
            .map(|(forward, backward)| {
                let features: Vec<f32> = forward.iter().chain(backward.iter()).copied().collect();
                let mut logits = self.output_bias.clone();
                self.output.add_product(&features, &mut logits);

                let best = logits
                    .iter()
                    .enumerate()
                    .fold((0, f32::NEG_INFINITY), |best, (i, &v)| match v > best.1 {
                        true => (i, v),
                        false => best,
                    });

                match best.0 {
                    0 => Bies::Begin,
                    1 => Bies::Inside,
                    2 => Bies::End,
                    _ => Bies::Single,
                }
            })
            .collect()
    }
}

/// разбиение LSTM-моделью
#[derive(Debug, Clone, PartialEq)]
pub struct LstmSegmenter
{
    model: LstmModel,
}

impl LstmSegmenter
{
    pub fn new(model: LstmModel) -> Self
    {
        Self { model }
    }

    pub fn model(&self) -> &LstmModel
    {
        &self.model
    }

    /// номера кластеров, перед которыми начинается слово (кроме 0)
    pub fn segment(&self, clusters: &[&str]) -> Vec<usize>
    {
        let labels = self.model.classify(clusters);

        (1 .. labels.len())
            .filter(|&i| {
                matches!(labels[i], Bies::Begin | Bies::Single) || matches!(labels[i - 1], Bies::End | Bies::Single)
            })
            .collect()
    }
}

/// скрытые состояния слоя для каждого входа; reverse - проход с конца
fn run_layer(layer: &LstmLayer, inputs: &[&[f32]], units: usize, reverse: bool) -> Vec<Vec<f32>>
{
    let mut states = vec![vec![]; inputs.len()];
    let (mut hidden, mut cell) = (vec![0.0; units], vec![0.0; units]);

    for n in 0 .. inputs.len() {
        let i = match reverse {
            true => inputs.len() - 1 - n,
            false => n,
        };

        layer.step(inputs[i], &mut hidden, &mut cell);
        states[i] = hidden.clone();
    }

    states
}

#[inline(always)]
fn sigmoid(x: f32) -> f32
{
    1.0 / (1.0 + (-x).exp())
}

#[inline(always)]
fn dot(a: &[f32], b: &[f32]) -> f32
{
    a.iter().zip(b).map(|(a, b)| a * b).sum()
}

/// модель для тестов: кластеры "ก", "ข", "ค" размечаются как B, I, E
#[cfg(test)]
pub(crate) fn test_model() -> LstmModel
{
    let (dim, units) = (3, 3);

    let mut embedding = LstmMatrix::zeros(4, dim);
    (0 .. 3).for_each(|k| embedding.data[k * dim + k] = 1.0);

    let mut forward = LstmLayer {
        input_weights: LstmMatrix::zeros(4 * units, dim),
        hidden_weights: LstmMatrix::zeros(4 * units, units),
        bias: vec![0.0; 4 * units],
    };

    for k in 0 .. units {
        // input и output открыты, forget закрыт, cell повторяет вход
        forward.bias[k] = 10.0;
        forward.bias[units + k] = -10.0;
        forward.bias[3 * units + k] = 10.0;
        forward.input_weights.data[(2 * units + k) * dim + k] = 10.0;
    }

    let backward = LstmLayer {
        input_weights: LstmMatrix::zeros(4 * units, dim),
        hidden_weights: LstmMatrix::zeros(4 * units, units),
        bias: vec![0.0; 4 * units],
    };

    let mut output = LstmMatrix::zeros(4, 2 * units);
    (0 .. 3).for_each(|k| output.data[k * 2 * units + k] = 10.0);

    LstmModel {
        name: String::from("test"),
        clusters: StringList::from_strings(["ก", "ข", "ค"]),
        embedding,
        forward,
        backward,
        output,
        output_bias: vec![0.0, 0.0, 0.0, 1.0],
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn labels()
    {
        let model = test_model();
        model.validate().unwrap();

        assert_eq!(
            model.classify(&["ก", "ข", "ค", "x"]),
            vec![Bies::Begin, Bies::Inside, Bies::End, Bies::Single]
        );

        let segmenter = LstmSegmenter::new(model);
        assert_eq!(segmenter.segment(&["ก", "ข", "ค", "ก", "ข", "ค"]), vec![3]);
        assert_eq!(segmenter.segment(&["ก", "ข", "ค", "x"]), vec![3]);
    }

    #[test]
    fn inconsistent()
    {
        let mut model = test_model();
        model.output_bias.pop();

        assert_eq!(model.validate().unwrap_err().kind, DataErrorKind::InconsistentData);
        assert_eq!(LstmModel::default().validate().unwrap_err().kind, DataErrorKind::InconsistentData);
    }
}
