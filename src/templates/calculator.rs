//! Four-function calculator

use crate::domain::RenderBundle;
use crate::error::Result;

pub const NAME: &str = "Calculator";
pub const DESCRIPTION: &str = "Basic arithmetic calculator";

/// Keypad in row order: (label, extra classes)
const KEYS: [(&str, &str); 19] = [
    ("C", "bg-red-500 hover:bg-red-600 text-white"),
    ("⌫", "bg-red-400 hover:bg-red-500 text-white"),
    ("/", "bg-gray-300 hover:bg-gray-400"),
    ("*", "bg-gray-300 hover:bg-gray-400"),
    ("7", "bg-gray-200 hover:bg-gray-300"),
    ("8", "bg-gray-200 hover:bg-gray-300"),
    ("9", "bg-gray-200 hover:bg-gray-300"),
    ("-", "bg-gray-300 hover:bg-gray-400"),
    ("4", "bg-gray-200 hover:bg-gray-300"),
    ("5", "bg-gray-200 hover:bg-gray-300"),
    ("6", "bg-gray-200 hover:bg-gray-300"),
    ("+", "bg-gray-300 hover:bg-gray-400"),
    ("1", "bg-gray-200 hover:bg-gray-300"),
    ("2", "bg-gray-200 hover:bg-gray-300"),
    ("3", "bg-gray-200 hover:bg-gray-300"),
    ("=", "bg-blue-500 hover:bg-blue-600 text-white row-span-2"),
    ("0", "bg-gray-200 hover:bg-gray-300"),
    (".", "bg-gray-200 hover:bg-gray-300"),
    ("%", "bg-gray-300 hover:bg-gray-400"),
];

const STYLE: &str = r"
.calc-btn {
    padding: 1rem;
    font-size: 1.25rem;
    border-radius: 0.5rem;
    transition: all 0.2s;
}
.calc-btn:active {
    transform: scale(0.95);
}
";

const BEHAVIOR: &str = r"
const display = document.getElementById('display');
const buttons = document.querySelectorAll('.calc-btn');
let currentValue = '';
let operator = '';
let previousValue = '';

function compute(a, op, b) {
    const x = parseFloat(a);
    const y = parseFloat(b);
    switch (op) {
        case '+': return x + y;
        case '-': return x - y;
        case '*': return x * y;
        case '/': return y === 0 ? NaN : x / y;
    }
    return y;
}

buttons.forEach(button => {
    button.addEventListener('click', () => {
        const value = button.textContent;

        if (value === 'C') {
            currentValue = '';
            operator = '';
            previousValue = '';
            display.value = '';
        } else if (value === '⌫') {
            currentValue = currentValue.slice(0, -1);
            display.value = currentValue;
        } else if (value === '%') {
            if (currentValue) {
                currentValue = String(parseFloat(currentValue) / 100);
                display.value = currentValue;
            }
        } else if ('+-*/'.includes(value)) {
            operator = value;
            previousValue = currentValue;
            currentValue = '';
        } else if (value === '=') {
            if (previousValue && operator && currentValue) {
                currentValue = String(compute(previousValue, operator, currentValue));
                display.value = currentValue;
                operator = '';
                previousValue = '';
            }
        } else if (value !== '.' || !currentValue.includes('.')) {
            currentValue += value;
            display.value = currentValue;
        }
    });
});
";

/// Build the calculator bundle
pub fn generate() -> Result<RenderBundle> {
    let buttons: String = KEYS
        .iter()
        .map(|(label, classes)| {
            format!("\n        <button class=\"calc-btn {classes}\">{label}</button>")
        })
        .collect();

    let markup = format!(
        r#"
<div class="max-w-md mx-auto bg-white p-6 rounded-lg shadow-lg">
    <div class="mb-4">
        <input type="text" id="display" class="w-full px-4 py-2 text-right text-2xl font-mono bg-gray-100 rounded" readonly>
    </div>
    <div class="grid grid-cols-4 gap-2">{buttons}
    </div>
</div>
"#
    );

    Ok(RenderBundle::new(markup, STYLE, BEHAVIOR))
}
