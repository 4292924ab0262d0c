use super::crc16::append_checksum;
use crate::domain::data_object::{Content, DataObject, ObjectList, pad2};
use crate::error::{QrError, Result};
use std::borrow::Cow;
use tracing::trace;

/// Longest value a two-digit length field can describe.
pub const MAX_VALUE_LENGTH: usize = 99;

/// Encodes the tree as `tag + length + value` triples in tree order and
/// terminates it with the CRC object.
///
/// Parent values are rebuilt from their children first. The checksum
/// placeholder is skipped during the pass and always emitted last.
pub fn serialize(tree: &ObjectList) -> Result<String> {
    let mut prefix = String::new();
    for object in tree {
        encode_object(object, &mut prefix)?;
    }
    trace!(prefix = %prefix, "encoded data objects");

    Ok(append_checksum(&prefix))
}

fn encode_object(object: &DataObject, out: &mut String) -> Result<()> {
    let value = match &object.content {
        Content::Leaf(value) => Cow::Borrowed(value.as_str()),
        Content::Children(children) => {
            let mut derived = String::new();
            for child in children {
                encode_object(child, &mut derived)?;
            }
            Cow::Owned(derived)
        }
        Content::Checksum => return Ok(()),
    };

    let length = value.chars().count();
    if length > MAX_VALUE_LENGTH {
        return Err(QrError::ValueTooLong {
            tag: object.tag.clone(),
            length,
        });
    }

    out.push_str(&object.tag);
    out.push_str(&pad2(length));
    out.push_str(&value);
    Ok(())
}
