use diesel::prelude::*;

use ll_core::menu::MenuItem;

use crate::db::schema::t_menu_item;

#[derive(Debug, Queryable, Insertable)]
#[diesel(table_name = t_menu_item)]
pub struct MenuItemRow {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub price: String,
    pub image: String,
    pub category: String,
}

impl From<MenuItemRow> for MenuItem {
    fn from(row: MenuItemRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            description: row.description,
            price: row.price,
            image: row.image,
            category: row.category,
        }
    }
}

impl From<MenuItem> for MenuItemRow {
    fn from(item: MenuItem) -> Self {
        Self {
            id: item.id,
            title: item.title,
            description: item.description,
            price: item.price,
            image: item.image,
            category: item.category,
        }
    }
}
