mod wish_list_window;

pub use wish_list_window::WishListWindow;
