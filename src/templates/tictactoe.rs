//! Tic-tac-toe against a random-move opponent

use crate::domain::RenderBundle;
use crate::error::Result;

pub const NAME: &str = "Tic Tac Toe";
pub const DESCRIPTION: &str = "Classic two-player game with AI opponent";

const CELL: &str = r#"<div class="w-24 h-24 bg-white border-4 border-gray-300 rounded-lg flex items-center justify-center text-4xl font-bold cursor-pointer hover:bg-gray-50"></div>"#;

const STYLE: &str = r"
#tictactoe > div {
    transition: all 0.3s ease;
}
#tictactoe > div:hover {
    transform: scale(1.05);
}
";

const BEHAVIOR: &str = r#"
const cells = document.querySelectorAll('#tictactoe > div');
const status = document.getElementById('status');
const resetBtn = document.getElementById('resetGame');
let currentPlayer = 'X';
let gameBoard = Array(9).fill('');
let gameActive = true;

cells.forEach((cell, index) => {
    cell.addEventListener('click', () => handleCellClick(index));
});

resetBtn.addEventListener('click', resetGame);

function handleCellClick(index) {
    if (!gameBoard[index] && gameActive) {
        gameBoard[index] = currentPlayer;
        cells[index].textContent = currentPlayer;
        cells[index].classList.add(currentPlayer === 'X' ? 'text-blue-500' : 'text-red-500');

        if (checkWinner()) {
            status.textContent = `${currentPlayer} wins!`;
            gameActive = false;
            return;
        }

        if (gameBoard.every(cell => cell)) {
            status.textContent = "It's a draw!";
            gameActive = false;
            return;
        }

        currentPlayer = currentPlayer === 'X' ? 'O' : 'X';
        status.textContent = `${currentPlayer}'s turn`;

        if (currentPlayer === 'O') {
            setTimeout(makeAIMove, 500);
        }
    }
}

function makeAIMove() {
    if (!gameActive) return;
    const availableMoves = gameBoard
        .map((cell, index) => cell === '' ? index : null)
        .filter(index => index !== null);
    if (availableMoves.length > 0) {
        handleCellClick(availableMoves[Math.floor(Math.random() * availableMoves.length)]);
    }
}

function checkWinner() {
    const winPatterns = [
        [0, 1, 2], [3, 4, 5], [6, 7, 8],
        [0, 3, 6], [1, 4, 7], [2, 5, 8],
        [0, 4, 8], [2, 4, 6]
    ];
    return winPatterns.some(pattern => pattern.every(index => gameBoard[index] === currentPlayer));
}

function resetGame() {
    gameBoard = Array(9).fill('');
    gameActive = true;
    currentPlayer = 'X';
    status.textContent = "X's turn";
    cells.forEach(cell => {
        cell.textContent = '';
        cell.classList.remove('text-blue-500', 'text-red-500');
    });
}
"#;

/// Build the tic-tac-toe bundle
pub fn generate() -> Result<RenderBundle> {
    let markup = format!(
        r#"
<div class="flex flex-col items-center">
    <div class="grid grid-cols-3 gap-4 mb-4" id="tictactoe">
        {cells}
    </div>
    <div class="text-xl font-bold mb-4" id="status">Your turn (X)</div>
    <button class="px-4 py-2 bg-blue-500 text-white rounded-lg hover:bg-blue-600" id="resetGame">Reset Game</button>
</div>
"#,
        cells = CELL.repeat(9)
    );

    Ok(RenderBundle::new(markup, STYLE, BEHAVIOR))
}
