//! Side-effecting collaborators the kernel calls back into.
//!
//! The kernel decides; implementations (HUD panels, browser launchers, test
//! recorders) only perform the effect.

use gallery_common::InfoRecord;

/// Shows or hides the disclosed exhibit's record. Called every frame.
pub trait ContentDisplay {
    fn show(&mut self, info: &InfoRecord);
    fn hide(&mut self);
}

/// Opens an exhibit's reference link after a successful pick.
pub trait ReferenceOpener {
    fn open(&mut self, url: &str);
}

impl<T: ContentDisplay + ?Sized> ContentDisplay for &mut T {
    fn show(&mut self, info: &InfoRecord) {
        (**self).show(info);
    }

    fn hide(&mut self) {
        (**self).hide();
    }
}

impl<T: ReferenceOpener + ?Sized> ReferenceOpener for &mut T {
    fn open(&mut self, url: &str) {
        (**self).open(url);
    }
}
