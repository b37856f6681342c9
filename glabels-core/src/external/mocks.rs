// glabels-core/src/external/mocks.rs

// --- Mocking Infrastructure (for testing) ---

use super::{ProcessOutput, ProcessRunner};
use crate::error::{CoreError, CoreResult};
use std::cell::RefCell;
use std::ffi::OsString;
use std::collections::VecDeque;
use std::rc::Rc;

/// One call observed by the mock runner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceivedCall {
    pub argv: Vec<OsString>,
    pub stdin: Vec<u8>,
}

/// Mock implementation of ProcessRunner.
///
/// Responses are consumed in the order they were added. Clones share state,
/// so a test can keep a handle after moving the runner into a client.
#[derive(Clone, Default)]
pub struct MockProcessRunner {
    responses: Rc<RefCell<VecDeque<CoreResult<ProcessOutput>>>>,
    received_calls: Rc<RefCell<Vec<ReceivedCall>>>,
}

impl MockProcessRunner {
    pub fn new() -> Self {
        Default::default()
    }

    /// Queues a zero-exit response with the given stdout.
    pub fn add_success(&self, stdout: impl Into<Vec<u8>>) {
        self.add_output(ProcessOutput::success(stdout));
    }

    /// Queues a non-zero exit response.
    pub fn add_exit_error(&self, exit_code: i32, stdout: impl Into<Vec<u8>>, stderr: impl Into<Vec<u8>>) {
        self.add_output(ProcessOutput::failure(exit_code, stdout, stderr));
    }

    pub fn add_output(&self, output: ProcessOutput) {
        self.responses.borrow_mut().push_back(Ok(output));
    }

    /// Queues an error returned instead of running, e.g. a spawn failure.
    pub fn add_spawn_error(&self, error: CoreError) {
        self.responses.borrow_mut().push_back(Err(error));
    }

    pub fn get_received_calls(&self) -> Vec<ReceivedCall> {
        self.received_calls.borrow().clone()
    }

    pub fn call_count(&self) -> usize {
        self.received_calls.borrow().len()
    }
}

impl ProcessRunner for MockProcessRunner {
    fn run(&self, argv: &[OsString], stdin: &[u8]) -> CoreResult<ProcessOutput> {
        self.received_calls.borrow_mut().push(ReceivedCall {
            argv: argv.to_vec(),
            stdin: stdin.to_vec(),
        });

        match self.responses.borrow_mut().pop_front() {
            Some(response) => response,
            None => {
                log::error!("MockProcessRunner: No response queued for command args: {:?}", argv);
                panic!("MockProcessRunner: No response queued for command args: {:?}", argv);
            }
        }
    }
}
