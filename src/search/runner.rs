//! 后台播放线程
//!
//! 工作线程按顺序回放 [`SearchTrace`] 的步骤，按当前速度暂停，
//! 并通过 channel 把每一步交给 UI 线程。UI 状态只在 UI 线程上修改。

use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::mpsc::Sender;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use uuid::Uuid;

use super::{SearchTrace, Step};
use crate::models::Speed;

/// 工作线程发往 UI 的消息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunUpdate {
    pub run_id: Uuid,
    pub step: Step,
}

/// 暂停策略
pub trait Pacer: Send + Sync {
    fn pause(&self, duration: Duration);
}

/// 使用 `thread::sleep` 的真实暂停
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadSleep;

impl Pacer for ThreadSleep {
    fn pause(&self, duration: Duration) {
        if !duration.is_zero() {
            thread::sleep(duration);
        }
    }
}

/// UI 与工作线程共享的速度，运行中调整立即在下一步生效
#[derive(Debug, Clone)]
pub struct SharedSpeed(Arc<AtomicU8>);

impl SharedSpeed {
    pub fn new(speed: Speed) -> Self {
        Self(Arc::new(AtomicU8::new(speed.tenths())))
    }

    pub fn get(&self) -> Speed {
        Speed::from_tenths(self.0.load(Ordering::Relaxed))
    }

    pub fn set(&self, speed: Speed) {
        self.0.store(speed.tenths(), Ordering::Relaxed);
    }
}

/// 启动一次运行
///
/// `Mark` 先发送后暂停，`Finish` 先暂停后发送。接收端关闭时线程静默退出。
pub fn spawn_run(
    run_id: Uuid,
    trace: SearchTrace,
    speed: SharedSpeed,
    pacer: Arc<dyn Pacer>,
    sender: Sender<RunUpdate>,
) -> io::Result<JoinHandle<()>> {
    thread::Builder::new()
        .name("search-run".to_string())
        .spawn(move || {
            let span = tracing::debug_span!("search_run", %run_id);
            let _guard = span.enter();

            for step in trace.steps {
                let pause = speed.get().scale(step.pause());
                match step {
                    Step::Mark { .. } => {
                        if sender.send(RunUpdate { run_id, step }).is_err() {
                            tracing::debug!("receiver dropped, stopping run");
                            return;
                        }
                        pacer.pause(pause);
                    }
                    Step::Finish { outcome, .. } => {
                        pacer.pause(pause);
                        tracing::debug!(?outcome, "run finished");
                        if sender.send(RunUpdate { run_id, step }).is_err() {
                            tracing::debug!("receiver dropped before final result");
                        }
                        return;
                    }
                }
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DEFAULT_VALUES;
    use crate::search::{
        BINARY_VISITED_PAUSE, CURRENT_PAUSE, NOT_FOUND_PAUSE, Outcome, binary_search,
    };
    use std::sync::Mutex;
    use std::sync::mpsc;

    /// 记录暂停时长但不真正休眠
    #[derive(Default)]
    struct RecordingPacer {
        pauses: Mutex<Vec<Duration>>,
    }

    impl Pacer for RecordingPacer {
        fn pause(&self, duration: Duration) {
            self.pauses.lock().unwrap().push(duration);
        }
    }

    #[test]
    fn test_updates_arrive_in_order() {
        let trace = binary_search(&DEFAULT_VALUES, 52);
        let expected = trace.steps.clone();
        let (tx, rx) = mpsc::channel();
        let run_id = Uuid::new_v4();

        let handle = spawn_run(
            run_id,
            trace,
            SharedSpeed::new(Speed::default()),
            Arc::new(RecordingPacer::default()),
            tx,
        )
        .unwrap();
        handle.join().unwrap();

        let received: Vec<Step> = rx.iter().map(|update| update.step).collect();
        assert_eq!(received, expected);
    }

    #[test]
    fn test_pauses_scale_with_speed() {
        let trace = binary_search(&DEFAULT_VALUES, 1000);
        let pacer = Arc::new(RecordingPacer::default());
        let (tx, _rx) = mpsc::channel();

        spawn_run(
            Uuid::new_v4(),
            trace,
            SharedSpeed::new(Speed::from_factor(2.0)),
            pacer.clone(),
            tx,
        )
        .unwrap()
        .join()
        .unwrap();

        let pauses = pacer.pauses.lock().unwrap();
        assert_eq!(pauses[0], CURRENT_PAUSE / 2);
        assert_eq!(pauses[1], BINARY_VISITED_PAUSE / 2);
        assert_eq!(pauses.last(), Some(&(NOT_FOUND_PAUSE / 2)));
    }

    /// 第一次暂停时把共享速度调到 2.0x，模拟运行中拖动滑块
    struct SpeedUpPacer {
        speed: SharedSpeed,
        pauses: Mutex<Vec<Duration>>,
    }

    impl Pacer for SpeedUpPacer {
        fn pause(&self, duration: Duration) {
            let mut pauses = self.pauses.lock().unwrap();
            if pauses.is_empty() {
                self.speed.set(Speed::from_tenths(20));
            }
            pauses.push(duration);
        }
    }

    #[test]
    fn test_speed_change_applies_to_next_step() {
        let trace = binary_search(&DEFAULT_VALUES, 1000);
        let bases: Vec<Duration> = trace.steps.iter().map(|step| step.pause()).collect();
        let speed = SharedSpeed::new(Speed::default());
        let pacer = Arc::new(SpeedUpPacer {
            speed: speed.clone(),
            pauses: Mutex::new(Vec::new()),
        });
        let (tx, _rx) = mpsc::channel();

        spawn_run(Uuid::new_v4(), trace, speed, pacer.clone(), tx)
            .unwrap()
            .join()
            .unwrap();

        let pauses = pacer.pauses.lock().unwrap();
        assert_eq!(pauses.len(), bases.len());
        assert_eq!(pauses[0], CURRENT_PAUSE);
        for (pause, base) in pauses.iter().zip(&bases).skip(1) {
            assert_eq!(*pause, *base / 2);
        }
        assert_eq!(pauses[1], BINARY_VISITED_PAUSE / 2);
        assert_eq!(pauses.last(), Some(&(NOT_FOUND_PAUSE / 2)));
    }

    #[test]
    fn test_finish_is_last_update() {
        let trace = binary_search(&DEFAULT_VALUES, 24);
        let (tx, rx) = mpsc::channel();

        spawn_run(
            Uuid::new_v4(),
            trace,
            SharedSpeed::new(Speed::default()),
            Arc::new(RecordingPacer::default()),
            tx,
        )
        .unwrap()
        .join()
        .unwrap();

        let last = rx.iter().last().map(|update| update.step);
        assert!(matches!(
            last,
            Some(Step::Finish {
                outcome: Outcome::Found(4),
                ..
            })
        ));
    }

    #[test]
    fn test_dropped_receiver_stops_worker() {
        let trace = binary_search(&DEFAULT_VALUES, 1000);
        let (tx, rx) = mpsc::channel();
        drop(rx);

        let pacer = Arc::new(RecordingPacer::default());
        spawn_run(
            Uuid::new_v4(),
            trace,
            SharedSpeed::new(Speed::default()),
            pacer.clone(),
            tx,
        )
        .unwrap()
        .join()
        .unwrap();

        assert!(pacer.pauses.lock().unwrap().is_empty());
    }

    /// 在结束前的暂停里关闭接收端
    struct DropBeforeFinish {
        receiver: Mutex<Option<mpsc::Receiver<RunUpdate>>>,
        pauses: Mutex<Vec<Duration>>,
    }

    impl Pacer for DropBeforeFinish {
        fn pause(&self, duration: Duration) {
            if duration == NOT_FOUND_PAUSE {
                let receiver = self.receiver.lock().unwrap().take().unwrap();
                assert!(receiver.try_iter().count() > 0);
            }
            self.pauses.lock().unwrap().push(duration);
        }
    }

    #[test]
    fn test_receiver_dropped_before_final_result() {
        let trace = binary_search(&DEFAULT_VALUES, 1000);
        let steps = trace.steps.len();
        let (tx, rx) = mpsc::channel();
        let pacer = Arc::new(DropBeforeFinish {
            receiver: Mutex::new(Some(rx)),
            pauses: Mutex::new(Vec::new()),
        });

        let joined = spawn_run(
            Uuid::new_v4(),
            trace,
            SharedSpeed::new(Speed::default()),
            pacer.clone(),
            tx,
        )
        .unwrap()
        .join();

        assert!(joined.is_ok());
        assert!(pacer.receiver.lock().unwrap().is_none());
        assert_eq!(pacer.pauses.lock().unwrap().len(), steps);
    }

    #[test]
    fn test_shared_speed_updates() {
        let speed = SharedSpeed::new(Speed::default());
        let other = speed.clone();
        other.set(Speed::from_tenths(20));
        assert_eq!(speed.get().factor(), 2.0);
    }
}
