use crate::error::{QrError, Result};
use serde::{Serialize, Serializer};
use std::borrow::Cow;
use std::collections::HashMap;

/// Formats a character count as a TLV length field (zero-padded, width 2).
pub fn pad2(count: usize) -> String {
    format!("{count:02}")
}

/// What a data object carries in its value slot.
///
/// A node either holds a plain value, derives its value from an ordered list
/// of children, or is the checksum placeholder whose value only exists once
/// the rest of the payload has been encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    Leaf(String),
    Children(ObjectList),
    Checksum,
}

/// A single TLV field of the payload.
///
/// `name` and `comment` are descriptive metadata from the profile and are
/// never encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataObject {
    pub tag: String,
    pub name: &'static str,
    pub comment: &'static str,
    pub content: Content,
}

impl DataObject {
    pub fn leaf(tag: &str, name: &'static str, comment: &'static str, value: &str) -> Self {
        Self {
            tag: tag.to_string(),
            name,
            comment,
            content: Content::Leaf(value.to_string()),
        }
    }

    pub fn parent(
        tag: &str,
        name: &'static str,
        comment: &'static str,
        children: ObjectList,
    ) -> Self {
        Self {
            tag: tag.to_string(),
            name,
            comment,
            content: Content::Children(children),
        }
    }

    pub fn checksum(tag: &str, name: &'static str, comment: &'static str) -> Self {
        Self {
            tag: tag.to_string(),
            name,
            comment,
            content: Content::Checksum,
        }
    }

    /// Current value of the object. Parent values are derived from their
    /// children; the checksum placeholder has none until serialization.
    pub fn value(&self) -> Cow<'_, str> {
        match &self.content {
            Content::Leaf(value) => Cow::Borrowed(value),
            Content::Children(children) => Cow::Owned(
                children
                    .iter()
                    .map(|child| format!("{}{}{}", child.tag, child.length(), child.value()))
                    .collect(),
            ),
            Content::Checksum => Cow::Borrowed(""),
        }
    }

    pub fn length(&self) -> String {
        match self.content {
            Content::Checksum => "04".to_string(),
            _ => pad2(self.value().chars().count()),
        }
    }

    pub fn children(&self) -> Option<&ObjectList> {
        match &self.content {
            Content::Children(children) => Some(children),
            _ => None,
        }
    }

    fn replace_value(&mut self, path: String, value: String) -> Result<()> {
        match &mut self.content {
            Content::Leaf(current) => {
                *current = value;
                Ok(())
            }
            Content::Children(_) | Content::Checksum => Err(QrError::ComputedTag(path)),
        }
    }
}

/// Ordered collection of sibling data objects with O(1) lookup by tag.
///
/// Iteration always follows insertion order, which is the serialization
/// order of the payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObjectList {
    objects: Vec<DataObject>,
    index: HashMap<String, usize>,
}

impl ObjectList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an object. An existing sibling with the same tag is replaced
    /// in place so tags stay unique.
    pub fn push(&mut self, object: DataObject) {
        match self.index.get(&object.tag) {
            Some(&position) => self.objects[position] = object,
            None => {
                self.index.insert(object.tag.clone(), self.objects.len());
                self.objects.push(object);
            }
        }
    }

    pub fn get(&self, tag: &str) -> Option<&DataObject> {
        self.index.get(tag).map(|&position| &self.objects[position])
    }

    fn get_mut(&mut self, tag: &str) -> Option<&mut DataObject> {
        let position = *self.index.get(tag)?;
        self.objects.get_mut(position)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DataObject> {
        self.objects.iter()
    }

    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.objects.iter().map(|object| object.tag.as_str())
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Sets the value of the object `tag`, or of its child `child_tag` when
    /// given. Name and comment of the target are kept.
    pub fn upsert(
        &mut self,
        tag: &str,
        value: impl Into<String>,
        child_tag: Option<&str>,
    ) -> Result<()> {
        let object = self
            .get_mut(tag)
            .ok_or_else(|| QrError::TagNotFound(tag.to_string()))?;

        match child_tag {
            Some(child_tag) => {
                let path = format!("{tag}.{child_tag}");
                let Content::Children(children) = &mut object.content else {
                    return Err(QrError::TagNotFound(path));
                };
                children
                    .get_mut(child_tag)
                    .ok_or_else(|| QrError::TagNotFound(path.clone()))?
                    .replace_value(path, value.into())
            }
            None => object.replace_value(tag.to_string(), value.into()),
        }
    }

    /// Removes the object `tag`, or only its child `child_tag` when given.
    ///
    /// A parent left without children is removed as well. Removing something
    /// that is not there is a no-op.
    pub fn remove(&mut self, tag: &str, child_tag: Option<&str>) {
        let Some(&position) = self.index.get(tag) else {
            return;
        };

        if let Some(child_tag) = child_tag {
            let Content::Children(children) = &mut self.objects[position].content else {
                return;
            };
            children.remove(child_tag, None);
            if !children.is_empty() {
                return;
            }
        }

        self.objects.remove(position);
        self.reindex();
    }

    fn reindex(&mut self) {
        self.index = self
            .objects
            .iter()
            .enumerate()
            .map(|(position, object)| (object.tag.clone(), position))
            .collect();
    }
}

impl FromIterator<DataObject> for ObjectList {
    fn from_iter<I: IntoIterator<Item = DataObject>>(iter: I) -> Self {
        let mut list = Self::new();
        for object in iter {
            list.push(object);
        }
        list
    }
}

impl<'a> IntoIterator for &'a ObjectList {
    type Item = &'a DataObject;
    type IntoIter = std::slice::Iter<'a, DataObject>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[derive(Serialize)]
struct ObjectView<'a> {
    tag: &'a str,
    name: &'a str,
    length: String,
    // Absent for the checksum; its value only exists in the payload.
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<Cow<'a, str>>,
    #[serde(skip_serializing_if = "str::is_empty")]
    comment: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    children: Option<&'a ObjectList>,
}

impl Serialize for DataObject {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        ObjectView {
            tag: &self.tag,
            name: self.name,
            length: self.length(),
            value: match self.content {
                Content::Checksum => None,
                _ => Some(self.value()),
            },
            comment: self.comment,
            children: self.children(),
        }
        .serialize(serializer)
    }
}

impl Serialize for ObjectList {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}
