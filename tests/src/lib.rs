//! интеграционные тесты: сравнение с ICU4X (нормализация на текстах из test_data, свойства),
//! поставщики данных, сегментация

#[cfg(test)]
mod data;
#[cfg(test)]
mod normalization;
#[cfg(test)]
mod properties;
#[cfg(test)]
mod provider;
#[cfg(test)]
mod segmentation;
