//! Todo list

use crate::domain::RenderBundle;
use crate::error::Result;

pub const NAME: &str = "Todo List";
pub const DESCRIPTION: &str = "Task management with categories and priorities";

const MARKUP: &str = r#"
<div class="max-w-md mx-auto">
    <div class="flex gap-2 mb-4">
        <input type="text" id="todoInput" class="flex-1 px-4 py-2 border border-gray-300 rounded-lg" placeholder="Add a new task...">
        <button id="addTodo" class="px-4 py-2 bg-blue-500 text-white rounded-lg hover:bg-blue-600">Add</button>
    </div>
    <div id="todoList" class="space-y-2"></div>
</div>
"#;

const STYLE: &str = r"
.todo-item {
    transition: all 0.3s ease;
}
.todo-item.completed {
    opacity: 0.5;
    text-decoration: line-through;
}
";

const BEHAVIOR: &str = r#"
const todoInput = document.getElementById('todoInput');
const addTodo = document.getElementById('addTodo');
const todoList = document.getElementById('todoList');

addTodo.addEventListener('click', addTodoItem);
todoInput.addEventListener('keypress', e => {
    if (e.key === 'Enter') addTodoItem();
});

function addTodoItem() {
    const text = todoInput.value.trim();
    if (!text) return;

    const item = document.createElement('div');
    item.className = 'todo-item flex items-center gap-2 p-2 bg-white border border-gray-200 rounded-lg';

    const checkbox = document.createElement('input');
    checkbox.type = 'checkbox';
    checkbox.className = 'w-5 h-5';
    checkbox.addEventListener('change', () => item.classList.toggle('completed'));

    const label = document.createElement('span');
    label.className = 'flex-1';
    label.textContent = text;

    const deleteBtn = document.createElement('button');
    deleteBtn.className = 'text-red-500 hover:text-red-600';
    deleteBtn.innerHTML = '<i class="fas fa-trash"></i>';
    deleteBtn.addEventListener('click', () => item.remove());

    item.append(checkbox, label, deleteBtn);
    todoList.appendChild(item);
    todoInput.value = '';
}
"#;

/// Build the todo list bundle
pub fn generate() -> Result<RenderBundle> {
    Ok(RenderBundle::new(MARKUP, STYLE, BEHAVIOR))
}
