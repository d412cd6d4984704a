use uuid::Uuid;

/// Hands out display ids for horde entries
pub trait IdGenerator {
    fn next_id(&mut self) -> String;
}

/// Random v4 UUIDs
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn next_id(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Zero-padded counter; ids sort in the order they were issued
#[derive(Debug, Clone, Default)]
pub struct SequentialIds {
    next: u64,
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> String {
        let id = format!("{:08}", self.next);
        self.next += 1;
        id
    }
}
