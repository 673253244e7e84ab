//! Embedded template content
//!
//! These are compiled into the binary and used when no override file exists.

/// Context-menu component for a watched folder entry
pub const FOLDER_CONTEXT_MENU: &str = r#"import * as React from "react"
import * as ContextMenuPrimitive from "@radix-ui/react-context-menu"

import { cn } from "@/lib/utils"
import type { WatchedFolder } from "@/types/folders"

interface FolderContextMenuProps {
  folder: WatchedFolder
  platformStyle?: "win" | "mac"
  disabled?: boolean
  openLabel?: string
  revealLabel?: string
  onOpen?: (id: string) => void
  onReveal?: (id: string) => void
  onRename?: (id: string) => void
  onRemove?: (id: string) => void
  onSelect?: (id: string, multi?: boolean) => void
  children: React.ReactNode
}

const itemClassName =
  "flex cursor-pointer select-none items-center gap-2 rounded-sm px-2 py-1.5 text-sm outline-none transition-colors focus:bg-accent focus:text-accent-foreground data-[disabled=true]:pointer-events-none data-[disabled=true]:opacity-40"

export function FolderContextMenu({
  folder,
  platformStyle,
  disabled,
  openLabel,
  revealLabel,
  onOpen,
  onReveal,
  onRename,
  onRemove,
  onSelect,
  children,
}: FolderContextMenuProps) {
  const effectivePlatform = platformStyle ?? folder.platformStyle ?? "win"

  const resolvedOpenLabel = openLabel ?? "Open"
  const resolvedRevealLabel = React.useMemo(() => {
    if (revealLabel) return revealLabel
    if (effectivePlatform === "mac") return "Reveal in Finder"
    if (effectivePlatform === "win") return "Reveal in File Explorer"
    return "Reveal in File Manager"
  }, [effectivePlatform, revealLabel])

  const showReveal = effectivePlatform !== "win" && resolvedRevealLabel !== resolvedOpenLabel

  const handleOpen = React.useCallback(() => {
    if (disabled) return
    onSelect?.(folder.id, true)
    onOpen?.(folder.id)
  }, [disabled, folder.id, onOpen, onSelect])

  const handleReveal = React.useCallback(() => {
    if (disabled) return
    onReveal?.(folder.id)
  }, [disabled, folder.id, onReveal])

  const handleRename = React.useCallback(() => {
    if (disabled) return
    onRename?.(folder.id)
  }, [disabled, folder.id, onRename])

  const handleRemove = React.useCallback(() => {
    if (disabled) return
    onRemove?.(folder.id)
  }, [disabled, folder.id, onRemove])

  return (
    <ContextMenuPrimitive.Root>
      <ContextMenuPrimitive.Trigger asChild disabled={disabled}>
        {children}
      </ContextMenuPrimitive.Trigger>
      <ContextMenuPrimitive.Portal>
        <ContextMenuPrimitive.Content
          className={cn(
            "z-50 min-w-[10rem] overflow-hidden rounded-md border bg-popover p-1 text-popover-foreground shadow-md"
          )}
        >
          <ContextMenuPrimitive.Item
            className={itemClassName}
            data-disabled={disabled}
            onSelect={handleOpen}
          >
            {resolvedOpenLabel}
          </ContextMenuPrimitive.Item>
          {showReveal && (
            <ContextMenuPrimitive.Item
              className={itemClassName}
              data-disabled={disabled}
              onSelect={handleReveal}
            >
              {resolvedRevealLabel}
            </ContextMenuPrimitive.Item>
          )}
          <ContextMenuPrimitive.Separator className="-mx-1 my-1 h-px bg-border" />
          <ContextMenuPrimitive.Item
            className={itemClassName}
            data-disabled={disabled}
            onSelect={handleRename}
          >
            Rename
          </ContextMenuPrimitive.Item>
          <ContextMenuPrimitive.Item
            className={cn(itemClassName, "text-destructive focus:text-destructive")}
            data-disabled={disabled}
            onSelect={handleRemove}
          >
            Remove from list
          </ContextMenuPrimitive.Item>
        </ContextMenuPrimitive.Content>
      </ContextMenuPrimitive.Portal>
    </ContextMenuPrimitive.Root>
  )
}
"#;

/// Types shared by the folder components
pub const FOLDER_TYPES: &str = r#"export type PlatformStyle = "win" | "mac"

export interface WatchedFolder {
  id: string
  name: string
  path: string
  platformStyle?: PlatformStyle
}
"#;

/// Class-name merge helper used across the UI
pub const CN_UTIL: &str = r#"import { clsx, type ClassValue } from "clsx"
import { twMerge } from "tailwind-merge"

export function cn(...inputs: ClassValue[]) {
  return twMerge(clsx(inputs))
}
"#;

/// Get the embedded content by template name
pub fn get_embedded(name: &str) -> Option<&'static str> {
    match name {
        "folder-context-menu" => Some(FOLDER_CONTEXT_MENU),
        "folder-types" => Some(FOLDER_TYPES),
        "cn-util" => Some(CN_UTIL),
        _ => None,
    }
}
