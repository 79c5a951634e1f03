//! Entry id generation
//!
//! Ids look like `e<millis><3 base36 chars>`. The millisecond part never
//! repeats within one generator, so ids stay unique even for calls settling
//! in the same millisecond.

use rand::Rng;

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

#[derive(Debug, Default)]
pub struct IdGenerator {
    last_millis: i64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self) -> String {
        let now = chrono::Utc::now().timestamp_millis();
        let millis = if now <= self.last_millis {
            self.last_millis + 1
        } else {
            now
        };
        self.last_millis = millis;

        let mut rng = rand::thread_rng();
        let suffix: String = (0..3)
            .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
            .collect();
        format!("e{}{}", millis, suffix)
    }
}
