use crate::{
    dto::categories::CategoryTree, error::AppResult, repositories::category_repository,
    state::AppState,
};

/// Main categories with their sub categories nested under them.
pub async fn category_tree(state: &AppState) -> AppResult<Vec<CategoryTree>> {
    let mains = category_repository::main_categories(&state.orm).await?;
    let subs = category_repository::sub_categories(&state.orm).await?;

    let mut tree: Vec<CategoryTree> = mains
        .into_iter()
        .map(|main| CategoryTree {
            id: main.id,
            name: main.name,
            description: main.description,
            sub_categories: Vec::new(),
        })
        .collect();

    for sub in subs {
        if let Some(node) = tree.iter_mut().find(|node| node.id == sub.main_category_id) {
            node.sub_categories.push(sub);
        }
    }

    Ok(tree)
}
