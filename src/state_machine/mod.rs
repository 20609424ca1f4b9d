pub mod sync;

/// The [`StateMachine`] trait provides calling semantics and indicates the upholding of invariants
/// that guarantee deterministic behavior.
///
/// # Functionality
/// State machines operate on defined inputs and outputs. There are usually several kinds of each,
/// represented as an enum, while the machine's inherent impl holds one method per variant.
///
/// The type groupings are provided by the associated types of [`Input`](StateMachine::Input) and
/// [`Output`](StateMachine::Output). Method dispatch is defined by
/// [`process_input`](StateMachine::process_input) and [`poll_output`](StateMachine::poll_output).
///
/// # Invariants
/// A [`StateMachine`] must be pure: its operation must not depend on any external behavior of the
/// broader system, so that replaying the same inputs always yields the same state and outputs.
///
/// ## No Interior Mutability
/// All data is either immutable or mutable only through `&mut` access. No [`std::cell`] or
/// [`std::sync`] containers, and no shared smart pointers. `&'static` references to values
/// without interior mutability are allowed.
///
/// ## No IO
/// No network, file, or other system IO. Whatever the machine decides must be performed by its
/// owner, which polls the decision as [`Output`](StateMachine::Output) and reports the result back
/// as [`Input`](StateMachine::Input).
///
/// ### No System Time
/// Reading [`std::time::Instant::now`] or [`std::time::SystemTime`] is forbidden. Time values are
/// passed in through input, typically from an injected [`Clock`](crate::clock::Clock).
///
/// ## No Concurrency, No Async, No Blocking
/// Threads, async tasks and blocking calls all make the outcome depend on an external scheduler.
/// The owner drives the machine from whatever runtime it likes and serializes access to it.
///
/// # Side Effects
/// Logging is allowed as long as the logic of the machine never depends on its outcome.
///
/// # Example
/// ```ignore
/// pub enum CounterInput { Add(u32) }
/// pub enum CounterOutput { Crossed(u32) }
///
/// impl StateMachine for Counter {
///     type Input = CounterInput;
///     type Output = CounterOutput;
///
///     fn process_input(&mut self, input: Self::Input) {
///         match input {
///             CounterInput::Add(n) => self.add(n),
///         }
///     }
///
///     fn poll_output(&mut self) -> Option<Self::Output> {
///         self.poll_crossed().map(CounterOutput::Crossed)
///     }
/// }
/// ```
pub trait StateMachine {
    /// The type of input that is [processed](StateMachine::process_input) by the state machine.
    type Input;
    /// The type of output that is [polled](StateMachine::poll_output) by the state machine.
    type Output;

    /// Process the provided `input` into the state machine.
    fn process_input(&mut self, input: Self::Input);

    /// Poll the state machine for output, returning the first available output if present.
    fn poll_output(&mut self) -> Option<Self::Output>;
}
