//! tracing 구독자 초기화.

use serde::{Deserialize, Serialize};
use tracing::Level;

/// 설정 파일에 저장되는 로그 수준.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// `-v` 반복 횟수만큼 수준을 올린다.
    pub fn raised_by(self, verbosity: u8) -> Self {
        let order = [
            LogLevel::Error,
            LogLevel::Warn,
            LogLevel::Info,
            LogLevel::Debug,
            LogLevel::Trace,
        ];
        let current = order.iter().position(|l| *l == self).unwrap_or(1);
        let idx = (current + usize::from(verbosity)).min(order.len() - 1);
        order[idx]
    }

    pub fn as_level(self) -> Level {
        match self {
            LogLevel::Error => Level::ERROR,
            LogLevel::Warn => Level::WARN,
            LogLevel::Info => Level::INFO,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Trace => Level::TRACE,
        }
    }
}

/// 전역 구독자를 설치한다. 이미 설치되어 있으면 기존 구독자를 유지하고 false를 돌려준다.
pub fn init(level: LogLevel) -> bool {
    match tracing_subscriber::fmt()
        .without_time()
        .compact()
        .with_max_level(level.as_level())
        .with_writer(std::io::stderr)
        .try_init()
    {
        Ok(()) => true,
        Err(e) => {
            tracing::debug!("tracing subscriber already installed: {e}");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_keeps_existing_subscriber() {
        init(LogLevel::Warn);
        assert!(!init(LogLevel::Debug));
    }

    #[test]
    fn verbosity_raises_and_saturates() {
        assert_eq!(LogLevel::Warn.raised_by(0), LogLevel::Warn);
        assert_eq!(LogLevel::Warn.raised_by(2), LogLevel::Debug);
        assert_eq!(LogLevel::Info.raised_by(9), LogLevel::Trace);
    }
}
