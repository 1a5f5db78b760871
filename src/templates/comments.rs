//! Comment thread widget

use crate::domain::RenderBundle;
use crate::error::Result;

pub const NAME: &str = "Comment Section";
pub const DESCRIPTION: &str = "Interactive comment thread with replies";

const MARKUP: &str = r#"
<div class="max-w-2xl mx-auto">
    <div class="mb-4">
        <textarea id="commentInput" class="w-full px-4 py-2 border border-gray-300 rounded-lg" rows="3" placeholder="Write a comment..."></textarea>
        <button id="addComment" class="mt-2 px-4 py-2 bg-blue-500 text-white rounded-lg hover:bg-blue-600">Post Comment</button>
    </div>
    <div id="commentsList" class="space-y-4"></div>
</div>
"#;

const STYLE: &str = r"
.comment {
    transition: all 0.3s ease;
}
.comment:hover {
    transform: translateX(8px);
}
";

const BEHAVIOR: &str = r#"
const commentInput = document.getElementById('commentInput');
const addComment = document.getElementById('addComment');
const commentsList = document.getElementById('commentsList');

addComment.addEventListener('click', () => {
    const text = commentInput.value.trim();
    if (!text) return;

    const comment = document.createElement('div');
    comment.className = 'comment bg-white p-4 rounded-lg shadow';
    comment.innerHTML = `
        <div class="flex items-center mb-2">
            <div class="w-8 h-8 bg-gray-200 rounded-full flex items-center justify-center">
                <i class="fas fa-user text-gray-500"></i>
            </div>
            <div class="ml-2">
                <div class="font-semibold">Anonymous</div>
                <div class="text-sm text-gray-500">${new Date().toLocaleString()}</div>
            </div>
        </div>
        <div class="comment-body text-gray-700"></div>
        <div class="mt-2 flex gap-4">
            <button class="text-gray-500 hover:text-blue-500"><i class="fas fa-thumbs-up"></i> Like</button>
            <button class="text-gray-500 hover:text-blue-500"><i class="fas fa-reply"></i> Reply</button>
        </div>
    `;
    comment.querySelector('.comment-body').textContent = text;

    commentsList.insertBefore(comment, commentsList.firstChild);
    commentInput.value = '';
});
"#;

/// Build the comment section bundle
pub fn generate() -> Result<RenderBundle> {
    Ok(RenderBundle::new(MARKUP, STYLE, BEHAVIOR))
}
