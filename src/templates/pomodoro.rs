//! Pomodoro focus timer with 25 minute work and 5 minute break phases

use crate::domain::RenderBundle;
use crate::error::Result;

pub const NAME: &str = "Pomodoro Timer";
pub const DESCRIPTION: &str = "Focus timer with work/break intervals";

pub const WORK_MINUTES: u32 = 25;
pub const BREAK_MINUTES: u32 = 5;

const STYLE: &str = r"
#timer {
    font-variant-numeric: tabular-nums;
}
";

/// Build the pomodoro timer bundle
pub fn generate() -> Result<RenderBundle> {
    let markup = format!(
        r#"
<div class="max-w-md mx-auto text-center">
    <div class="text-6xl font-bold mb-4" id="timer">{WORK_MINUTES:02}:00</div>
    <div class="flex gap-2 justify-center mb-4">
        <button id="startTimer" class="px-4 py-2 bg-green-500 text-white rounded-lg hover:bg-green-600">Start</button>
        <button id="resetTimer" class="px-4 py-2 bg-red-500 text-white rounded-lg hover:bg-red-600">Reset</button>
    </div>
    <div id="phase" class="text-xl font-medium">Work Time</div>
</div>
"#
    );

    // Interval handles created here outlive a remount; nothing clears them.
    let behavior = r#"
const WORK_MINUTES = __WORK__;
const BREAK_MINUTES = __BREAK__;
let timeLeft = WORK_MINUTES * 60;
let timerId = null;
let isWorkPhase = true;

const timerDisplay = document.getElementById('timer');
const startBtn = document.getElementById('startTimer');
const resetBtn = document.getElementById('resetTimer');
const phaseDisplay = document.getElementById('phase');

startBtn.addEventListener('click', toggleTimer);
resetBtn.addEventListener('click', resetTimer);

function setStartStyle(running) {
    startBtn.textContent = running ? 'Pause' : 'Start';
    startBtn.classList.replace(running ? 'bg-green-500' : 'bg-red-500', running ? 'bg-red-500' : 'bg-green-500');
    startBtn.classList.replace(running ? 'hover:bg-green-600' : 'hover:bg-red-600', running ? 'hover:bg-red-600' : 'hover:bg-green-600');
}

function toggleTimer() {
    if (timerId) {
        clearInterval(timerId);
        timerId = null;
        setStartStyle(false);
    } else {
        timerId = setInterval(updateTimer, 1000);
        setStartStyle(true);
    }
}

function render() {
    const minutes = Math.floor(timeLeft / 60);
    const seconds = timeLeft % 60;
    timerDisplay.textContent = `${minutes.toString().padStart(2, '0')}:${seconds.toString().padStart(2, '0')}`;
}

function updateTimer() {
    timeLeft--;
    if (timeLeft < 0) {
        isWorkPhase = !isWorkPhase;
        timeLeft = (isWorkPhase ? WORK_MINUTES : BREAK_MINUTES) * 60;
        phaseDisplay.textContent = isWorkPhase ? 'Work Time' : 'Break Time';
    }
    render();
}

function resetTimer() {
    clearInterval(timerId);
    timerId = null;
    isWorkPhase = true;
    timeLeft = WORK_MINUTES * 60;
    setStartStyle(false);
    phaseDisplay.textContent = 'Work Time';
    render();
}
"#
    .replace("__WORK__", &WORK_MINUTES.to_string())
    .replace("__BREAK__", &BREAK_MINUTES.to_string());

    Ok(RenderBundle::new(markup, STYLE, behavior))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timer_starts_at_work_length() {
        let bundle = generate().unwrap();
        assert!(bundle.markup.contains(">25:00<"));
        assert!(bundle.behavior.contains("const WORK_MINUTES = 25;"));
        assert!(bundle.behavior.contains("const BREAK_MINUTES = 5;"));
    }
}
