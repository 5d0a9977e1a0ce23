// Named views over a board's latches, so a host can snapshot and restore them
// without knowing the board's layout.
pub struct StateField<'a> {
    name: &'static str,
    value: StateValue<'a>,
}

pub enum StateValue<'a> {
    Bool(&'a mut bool),
    U8(&'a mut u8),
    U16(&'a mut u16),
    Bytes(&'a mut [u8]),
    Words(&'a mut [u16]),
}

impl<'a> StateField<'a> {
    pub fn bool(name: &'static str, value: &'a mut bool) -> Self {
        Self { name, value: StateValue::Bool(value) }
    }

    pub fn u8(name: &'static str, value: &'a mut u8) -> Self {
        Self { name, value: StateValue::U8(value) }
    }

    pub fn u16(name: &'static str, value: &'a mut u16) -> Self {
        Self { name, value: StateValue::U16(value) }
    }

    pub fn bytes(name: &'static str, value: &'a mut [u8]) -> Self {
        Self { name, value: StateValue::Bytes(value) }
    }

    pub fn words(name: &'static str, value: &'a mut [u16]) -> Self {
        Self { name, value: StateValue::Words(value) }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn value(&self) -> &StateValue<'a> {
        &self.value
    }

    pub fn byte_len(&self) -> usize {
        match &self.value {
            StateValue::Bool(_) | StateValue::U8(_) => 1,
            StateValue::U16(_) => 2,
            StateValue::Bytes(bytes) => bytes.len(),
            StateValue::Words(words) => 2 * words.len(),
        }
    }

    // Little endian for multi-byte values.
    pub fn to_bytes(&self) -> Vec<u8> {
        match &self.value {
            StateValue::Bool(value) => vec![u8::from(**value)],
            StateValue::U8(value) => vec![**value],
            StateValue::U16(value) => value.to_le_bytes().to_vec(),
            StateValue::Bytes(bytes) => bytes.to_vec(),
            StateValue::Words(words) => words.iter().flat_map(|word| word.to_le_bytes()).collect(),
        }
    }

    pub fn load_bytes(&mut self, bytes: &[u8]) -> Result<(), String> {
        if bytes.len() != self.byte_len() {
            return Err(format!("State field '{}' needs {} bytes, but {} were provided.",
                self.name, self.byte_len(), bytes.len()));
        }

        match &mut self.value {
            StateValue::Bool(value) => **value = bytes[0] != 0,
            StateValue::U8(value) => **value = bytes[0],
            StateValue::U16(value) => **value = u16::from_le_bytes([bytes[0], bytes[1]]),
            StateValue::Bytes(target) => target.copy_from_slice(bytes),
            StateValue::Words(target) => {
                for (word, chunk) in target.iter_mut().zip(bytes.chunks_exact(2)) {
                    *word = u16::from_le_bytes([chunk[0], chunk[1]]);
                }
            }
        }

        Ok(())
    }
}

pub type Snapshot = Vec<(&'static str, Vec<u8>)>;

pub fn snapshot(fields: &[StateField]) -> Snapshot {
    fields.iter()
        .map(|field| (field.name(), field.to_bytes()))
        .collect()
}

pub fn restore(fields: &mut [StateField], snapshot: &Snapshot) -> Result<(), String> {
    for field in fields.iter_mut() {
        let (_, bytes) = snapshot.iter()
            .find(|(name, _)| *name == field.name())
            .ok_or_else(|| format!("Snapshot is missing state field '{}'.", field.name()))?;
        field.load_bytes(bytes)?;
    }

    Ok(())
}
