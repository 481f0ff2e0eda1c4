// File: src/corpus.rs
use crate::error::{DemoError, Result};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// One labelled bucket of example sentences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub key: String,
    /// Human-facing name shown next to results.
    pub label: String,
    pub samples: Vec<String>,
}

/// The labelled training corpus. Category order is significant: it drives
/// vocabulary identifiers and the order of every probability distribution.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Corpus {
    categories: Vec<Category>,
}

const HAPPY: &[&str] = &[
    "他高兴地压抑不住心跳",
    "今天开心极啦",
    "哈哈，太搞笑了",
    "她露出灿烂的笑容",
    "她高兴的笑啦",
    "收到大学录取通知书，她立刻欢呼雀跃起来",
    "笑口常开，好运自然来",
    "心情高兴，春风吹的暖意融融的",
    "哥哥欣喜若狂",
    "今天是一个开心的日子",
    "我捡到10元钱",
];

const SAD: &[&str] = &[
    "妈妈没了，我特别难过",
    "他留下伤心的泪水",
    "心里一阵莫名的忧伤",
    "这道题没有做出来，有点失落",
    "他难过了一整天",
    "我时常感到沮d,因为梦想与现实差距太大",
    "我一点也不快乐",
    "我的心好痛",
    "心里空落落的",
    "我感觉全世界都抛弃我了",
    "考试砸了",
];

const ANGRY: &[&str] = &[
    "他气愤得破口大骂",
    "他怒冲冲的闯过来",
    "他发怒了，瞪大眼睛，眉毛竖起",
    "你又闯祸了，太让我生气了",
    "这东西质量太差了，你们负责人是谁",
    "他气得脸发青",
    "哼，真可恶",
    "你怎么能这么对我呢",
    "太过分啦",
    "不理你了",
];

impl Corpus {
    pub fn new() -> Self {
        Self::default()
    }

    /// The three-way emotion corpus the demo ships with.
    pub fn builtin() -> Self {
        let mut corpus = Self::new();
        corpus.push_category("happy", "高兴", HAPPY.iter().copied());
        corpus.push_category("sad", "难过", SAD.iter().copied());
        corpus.push_category("angry", "生气", ANGRY.iter().copied());
        corpus
    }

    /// Appends a category, or replaces the label and samples of an existing
    /// one in place so its position is kept.
    pub fn push_category<I, S>(&mut self, key: &str, label: &str, samples: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let samples: Vec<String> = samples.into_iter().map(Into::into).collect();
        match self.categories.iter_mut().find(|c| c.key == key) {
            Some(existing) => {
                existing.label = label.to_string();
                existing.samples = samples;
            }
            None => self.categories.push(Category {
                key: key.to_string(),
                label: label.to_string(),
                samples,
            }),
        }
    }

    pub fn categories(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    pub fn category_keys(&self) -> Vec<String> {
        self.categories.iter().map(|c| c.key.clone()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.categories.iter().any(|c| c.key == key)
    }

    /// Display label for a category, falling back to its key.
    pub fn label<'a>(&'a self, key: &'a str) -> &'a str {
        self.categories
            .iter()
            .find(|c| c.key == key)
            .map_or(key, |c| c.label.as_str())
    }

    pub fn samples(&self, key: &str) -> Result<&[String]> {
        Ok(&self.category(key)?.samples)
    }

    pub fn sample_count(&self, key: &str) -> Result<usize> {
        Ok(self.category(key)?.samples.len())
    }

    pub fn sample(&self, key: &str, index: usize) -> Result<&str> {
        let category = self.category(key)?;
        category
            .samples
            .get(index)
            .map(String::as_str)
            .ok_or_else(|| out_of_range(category, index))
    }

    /// Adds a trimmed sample to the end of a category.
    pub fn add_sample(&mut self, key: &str, text: &str) -> Result<()> {
        let text = non_blank(text)?;
        self.category_mut(key)?.samples.push(text);
        Ok(())
    }

    /// Replaces a sample in place.
    pub fn edit_sample(&mut self, key: &str, index: usize, text: &str) -> Result<()> {
        let text = non_blank(text)?;
        let category = self.category_mut(key)?;
        match category.samples.get_mut(index) {
            Some(slot) => {
                *slot = text;
                Ok(())
            }
            None => Err(out_of_range(category, index)),
        }
    }

    pub fn remove_sample(&mut self, key: &str, index: usize) -> Result<String> {
        let category = self.category_mut(key)?;
        if index >= category.samples.len() {
            return Err(out_of_range(category, index));
        }
        Ok(category.samples.remove(index))
    }

    fn category(&self, key: &str) -> Result<&Category> {
        self.categories
            .iter()
            .find(|c| c.key == key)
            .ok_or_else(|| DemoError::UnknownCategory(key.to_string()))
    }

    fn category_mut(&mut self, key: &str) -> Result<&mut Category> {
        self.categories
            .iter_mut()
            .find(|c| c.key == key)
            .ok_or_else(|| DemoError::UnknownCategory(key.to_string()))
    }
}

fn non_blank(text: &str) -> Result<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        warn!("rejected blank sample");
        return Err(DemoError::EmptySample);
    }
    Ok(trimmed.to_string())
}

fn out_of_range(category: &Category, index: usize) -> DemoError {
    warn!(category = %category.key, index, "sample index out of range");
    DemoError::SampleOutOfRange {
        category: category.key.clone(),
        index,
        len: category.samples.len(),
    }
}
